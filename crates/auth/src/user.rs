//! Registered user record and registration rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use certtrack_core::{DomainError, DomainResult, Entity, UserId};

use crate::Role;

/// Shortest password the registration form accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A registered user as stored in the `"allUsers"` collection.
///
/// Passwords are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Nil for records written before identifiers existed; storage assigns one.
    #[serde(default)]
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    /// Missing on some older records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<DateTime<Utc>>,
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input of the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Trim and lower-case an email after a basic shape check.
pub(crate) fn normalize_email(raw: &str) -> DomainResult<String> {
    let email = raw.trim();
    let well_formed = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
    if !well_formed {
        return Err(DomainError::validation("invalid email format"));
    }
    Ok(email.to_lowercase())
}

impl User {
    /// Validate a registration and build the user record.
    ///
    /// Self-registration always yields [`Role::User`].
    pub fn register(registration: Registration, now: DateTime<Utc>) -> DomainResult<Self> {
        if registration.password != registration.confirm_password {
            return Err(DomainError::validation("passwords do not match"));
        }
        if registration.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(DomainError::validation(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let name = registration.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let email = normalize_email(&registration.email)?;

        Ok(Self {
            id: UserId::new(),
            name: name.to_string(),
            email,
            role: Role::User,
            registered_at: Some(now),
        })
    }

    /// "Registered" column text.
    pub fn registered_on(&self) -> String {
        self.registered_at
            .map(|at| at.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(password: &str, confirm: &str) -> Registration {
        Registration {
            name: " Alice Smith ".to_string(),
            email: " Alice@Example.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn register_success() {
        let now = Utc::now();
        let user = User::register(registration("secret1", "secret1"), now).unwrap();
        assert_eq!(user.name, "Alice Smith");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.registered_at, Some(now));
    }

    #[test]
    fn register_password_mismatch() {
        let err = User::register(registration("secret1", "secret2"), Utc::now()).unwrap_err();
        assert_eq!(err, DomainError::validation("passwords do not match"));
    }

    #[test]
    fn register_password_too_short() {
        let err = User::register(registration("12345", "12345"), Utc::now()).unwrap_err();
        assert!(err.to_string().contains("at least 6"));
    }

    #[test]
    fn register_invalid_email() {
        let mut reg = registration("secret1", "secret1");
        reg.email = "alice.example.com".to_string();
        assert!(User::register(reg, Utc::now()).is_err());

        assert!(normalize_email("@example.com").is_err());
        assert!(normalize_email("alice@").is_err());
    }

    #[test]
    fn legacy_record_without_timestamp() {
        let raw = r#"{"name":"Bob","email":"bob@example.com","role":"admin"}"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert!(user.id.is_nil());
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.registered_on(), "N/A");
    }
}
