use certtrack_core::DomainError;
use certtrack_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(StorageError),
}

impl TrackerError {
    /// The domain failure behind this error, if it is one.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            TrackerError::Domain(err) => Some(err),
            TrackerError::Storage(_) => None,
        }
    }
}

// Repositories report lookups and validation through `StorageError::Domain`;
// surface those as domain errors so callers match on one variant.
impl From<StorageError> for TrackerError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Domain(domain) => TrackerError::Domain(domain),
            other => TrackerError::Storage(other),
        }
    }
}
