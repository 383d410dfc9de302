//! Login and the admin check.

use serde::{Deserialize, Serialize};

use certtrack_core::{DomainError, DomainResult};

use crate::Role;
use crate::user::normalize_email;

/// The logged-in actor, as kept under `"userRole"` / `"userEmail"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: Role,
    pub email: String,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Gate for admin-only operations.
    pub fn require_admin(&self) -> DomainResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(DomainError::Unauthorized)
        }
    }
}

/// Login form input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// The single configured administrator account.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            email: "admin@gmail.com".to_string(),
            password: "admin@123".to_string(),
        }
    }
}

impl core::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AdminCredentials {
    fn matches(&self, credentials: &Credentials) -> bool {
        credentials.email.trim().eq_ignore_ascii_case(&self.email)
            && credentials.password == self.password
    }
}

/// Resolve a login attempt into a session.
///
/// The configured admin pair yields an admin session; any other well-formed
/// email logs in as a regular user.
pub fn login(credentials: &Credentials, admin: &AdminCredentials) -> DomainResult<Session> {
    let email = normalize_email(&credentials.email)?;

    let role = if admin.matches(credentials) {
        Role::Admin
    } else {
        Role::User
    };
    tracing::info!(role = %role, "login accepted");

    Ok(Session { role, email })
}
