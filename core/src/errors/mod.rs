//! Domain-specific error types and error handling.

mod types;

pub use types::ValidationError;

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The storage layer rejected a duplicate value for a unique field
    #[error("Unique constraint violated: {field}")]
    UniqueViolation { field: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// The requested database alias is not configured
    #[error("Unknown database alias: {alias}")]
    UnknownDatabase { alias: String },

    #[error("Password hashing failed: {message}")]
    Hashing { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Whether this error was raised by input validation
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
