//! Value objects representing immutable domain concepts.

pub mod email;
pub mod password;
pub mod profile;

// Re-export commonly used types
pub use email::Email;
pub use password::{PasswordSecret, UNUSABLE_PASSWORD_PREFIX, UNUSABLE_PASSWORD_SUFFIX_LENGTH};
pub use profile::{Profile, ProfileUpdate, ADDRESS_MAX_LENGTH};
