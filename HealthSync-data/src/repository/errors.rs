use std::sync::PoisonError;
use thiserror::Error;

/// Error type for repository operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RepositoryError {
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Lock error
    #[error("Lock error: {0}")]
    Lock(String),
}

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(error: PoisonError<T>) -> Self {
        RepositoryError::Lock(error.to_string())
    }
}
