//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management, one pool per alias
//! - Repository implementations
//! - Embedded schema migrations

pub mod connection;
pub mod mysql;
pub mod registry;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::MySqlUserRepository;
pub use registry::DatabaseRegistry;

/// Migrations embedded from `infra/migrations`
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
