//! Environment-driven configuration.

use std::path::PathBuf;

use certtrack_auth::AdminCredentials;

pub const ADMIN_EMAIL_VAR: &str = "CERTTRACK_ADMIN_EMAIL";
pub const ADMIN_PASSWORD_VAR: &str = "CERTTRACK_ADMIN_PASSWORD";
pub const STORE_PATH_VAR: &str = "CERTTRACK_STORE_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackerConfig {
    pub admin: AdminCredentials,
    /// `None` means the per-user default location.
    pub store_path: Option<PathBuf>,
}

impl TrackerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = AdminCredentials::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let email = non_empty(ADMIN_EMAIL_VAR);
        let password = non_empty(ADMIN_PASSWORD_VAR);
        if password.is_none() {
            tracing::warn!("{ADMIN_PASSWORD_VAR} not set; using insecure dev default");
        }

        Self {
            admin: AdminCredentials {
                email: email.unwrap_or(defaults.email),
                password: password.unwrap_or(defaults.password),
            },
            store_path: non_empty(STORE_PATH_VAR).map(PathBuf::from),
        }
    }
}
