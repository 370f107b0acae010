//! Validation error types
//!
//! These errors represent input validation failures raised before anything
//! is written to storage.

use thiserror::Error;

/// Validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid length for field: {field} (max: {max}, actual: {actual})")]
    InvalidLength {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },
}

impl ValidationError {
    /// Shorthand for a missing required field
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::RequiredField {
            field: field.into(),
        }
    }

    /// Name of the field that failed validation
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::InvalidLength { field, .. }
            | ValidationError::InvalidFormat { field } => field,
        }
    }
}
