use std::path::PathBuf;

use certtrack_core::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode or decode stored value: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Failure reported by the underlying store (poisoned lock, browser API).
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
