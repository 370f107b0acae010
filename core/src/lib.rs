//! # AbleToTrip Core
//!
//! Core domain layer for AbleToTrip member accounts.
//! This crate contains the member entity and its value objects, the account
//! manager service, the password hashing port, repository interfaces, and
//! the error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{AuthUser, Email, PasswordSecret, Profile, ProfileUpdate, User};
pub use errors::*;
pub use repositories::{MockUserRepository, UserRepository};
pub use services::{BcryptPasswordHasher, PasswordHasher, UserManager};
