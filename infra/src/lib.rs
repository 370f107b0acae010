//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for AbleToTrip member
//! accounts. It provides the concrete MySQL persistence behind the
//! repository ports defined in `att_core`.
//!
//! ## Architecture
//!
//! - **Database**: one SQLx connection pool per configured alias, collected
//!   in a [`DatabaseRegistry`](database::DatabaseRegistry)
//! - **Repositories**: [`MySqlUserRepository`](database::MySqlUserRepository)
//!   routes every call to the pool named by its `using` alias
//! - **Migrations**: embedded SQL migrations applied per alias

// Re-export core types for convenience
pub use att_core::errors::*;

/// Database module - MySQL implementations using SQLx
pub mod database;

pub use database::{DatabasePool, DatabaseRegistry, MySqlUserRepository, PoolStatistics};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Storage {
            message: err.to_string(),
        }
    }
}
