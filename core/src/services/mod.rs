//! Business services containing domain logic and use cases.

pub mod password;
pub mod user_manager;

// Re-export commonly used types
pub use password::{BcryptPasswordHasher, PasswordHasher};
pub use user_manager::{
    UserManager, DEFAULT_RANDOM_PASSWORD_LENGTH, RANDOM_PASSWORD_ALLOWED_CHARS,
};
