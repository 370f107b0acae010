//! Domain layer containing business entities and value objects.

pub mod entities;
pub mod identity;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::{User, EMAIL_FIELD, REQUIRED_FIELDS, USERNAME_FIELD};
pub use identity::AuthUser;
pub use value_objects::{Email, PasswordSecret, Profile, ProfileUpdate};
