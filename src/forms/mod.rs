//! Admin form inputs and their typed payloads.
//!
//! Every form derives [`validator::Validate`] for the shape checks and is
//! converted into a payload of domain types through `TryFrom`.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod borrowers;
pub mod categories;
pub mod media;
pub mod media_types;
pub mod sites;

/// Error raised while turning a submitted form into its payload.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Form validation failed: {0}")]
    Validation(String),
    #[error("Form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for FormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for FormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}
