//! Form definitions backing the field settings pages.

use thiserror::Error;
use validator::ValidationErrors;

pub mod settings;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid index field name")]
    InvalidIndexParameter,

    #[error("invalid view mode")]
    InvalidViewMode,
}
