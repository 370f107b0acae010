//! Domain entities representing core business objects.

pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use user::{User, EMAIL_FIELD, REQUIRED_FIELDS, USERNAME_FIELD};
