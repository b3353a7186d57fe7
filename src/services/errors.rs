use thiserror::Error;

use crate::pagination::PlanError;
use crate::recursion::RecursionLimitExceeded;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    IndexOutOfRange(#[from] PlanError),

    #[error(transparent)]
    RecursionLimitExceeded(#[from] RecursionLimitExceeded),

    #[error("form error: {0}")]
    Form(String),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),

    #[error("rendering failed: {0}")]
    Render(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
