//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{PersistenceError, ValidationError};

use thiserror::Error;

/// Core domain errors
///
/// An unknown or already consumed token is not an error; it is reported as
/// an invalid outcome by the verification service.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Delivery failed: {message}")]
    Delivery { message: String },
}

impl DomainError {
    /// Whether retrying the same call may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, DomainError::Persistence(_) | DomainError::Delivery { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
