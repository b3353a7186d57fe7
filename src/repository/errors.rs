use std::sync::PoisonError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl<T> From<PoisonError<T>> for RepositoryError {
    fn from(err: PoisonError<T>) -> Self {
        RepositoryError::StorageError(format!("Settings lock poisoned: {err}"))
    }
}
