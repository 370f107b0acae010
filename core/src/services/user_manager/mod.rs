//! Account manager module
//!
//! The manager is the sanctioned way to create members:
//! - Email normalization and presence check
//! - Password hashing through the injected hasher
//! - Persistence through the injected repository, per database alias
//! - Superuser promotion, natural-key lookup and credential checks

mod service;


pub use service::{UserManager, DEFAULT_RANDOM_PASSWORD_LENGTH, RANDOM_PASSWORD_ALLOWED_CHARS};
