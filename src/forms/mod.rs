//! Form definitions backing the lead entry form.

use thiserror::Error;
use validator::ValidationErrors;

pub mod lead;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),
}
