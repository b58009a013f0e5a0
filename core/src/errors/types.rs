//! Error types for address validation and durable token storage

use std::path::PathBuf;
use thiserror::Error;

/// Validation errors raised before any state is touched
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid email address: {email}")]
    InvalidEmail { email: String },
}

/// Failures of the durable token store
///
/// Every variant means the attempted mutation was not applied: the store
/// rolls its in-memory mapping back before returning one of these.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Token store I/O failed for {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Token store file {path:?} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize token store: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Token store operation interrupted: {message}")]
    Interrupted { message: String },
}

impl PersistenceError {
    /// Wrap an I/O failure together with the file it concerned
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PersistenceError::Io {
            path: path.into(),
            source,
        }
    }
}
