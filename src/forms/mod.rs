//! Client-side validation run before a request is dispatched.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod ban;
pub mod login;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid user id")]
    InvalidUserId,

    #[error("invalid ban reason: {0}")]
    InvalidBanReason(TypeConstraintError),
}
