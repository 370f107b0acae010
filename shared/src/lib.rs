//! Shared utilities and common types for the AbleToTrip server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Email utilities (normalization, format checks, masking)
//! - Common type definitions

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, DatabasesConfig, Environment, LogFormat, LoggingConfig,
    PasswordConfig, DEFAULT_DB_ALIAS,
};
pub use types::Coordinate;
pub use utils::{email, validation};
