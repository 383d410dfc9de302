//! Domain error model.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures the tracker reports back to the user.
///
/// Everything here is deterministic: the same input against the same stored
/// records fails the same way. IO and encoding problems live in the storage
/// crate's own error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Form input was rejected; the message is shown as-is.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// A textual identifier did not parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// No stored record carries the requested identifier.
    #[error("not found")]
    NotFound,

    /// The record clashes with one already stored (duplicate email).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Admin-only action attempted without an admin session.
    #[error("unauthorized")]
    Unauthorized,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
