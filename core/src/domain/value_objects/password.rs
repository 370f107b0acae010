//! Opaque password secret.

use std::fmt;

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Prefix marking a secret that can never match any password
pub const UNUSABLE_PASSWORD_PREFIX: &str = "!";

/// Number of random characters appended to the unusable marker
pub const UNUSABLE_PASSWORD_SUFFIX_LENGTH: usize = 40;

/// Encoded password hash as produced by a [`PasswordHasher`].
///
/// Plaintext never goes in here. Hasher implementations build values with
/// [`PasswordSecret::from_encoded`]; storage adapters use the same
/// constructor to rehydrate what they previously persisted.
///
/// [`PasswordHasher`]: crate::services::password::PasswordHasher
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordSecret(String);

impl PasswordSecret {
    /// Wrap an already-encoded hash
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// A secret that no password verifies against
    pub fn unusable() -> Self {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(UNUSABLE_PASSWORD_SUFFIX_LENGTH)
            .map(char::from)
            .collect();
        Self(format!("{}{}", UNUSABLE_PASSWORD_PREFIX, suffix))
    }

    pub fn is_usable(&self) -> bool {
        !self.0.is_empty() && !self.0.starts_with(UNUSABLE_PASSWORD_PREFIX)
    }

    /// Encoded form, for persistence
    pub fn as_encoded(&self) -> &str {
        &self.0
    }
}

impl Default for PasswordSecret {
    fn default() -> Self {
        Self::unusable()
    }
}

// Never print the hash, not even in debug output
impl fmt::Debug for PasswordSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_usable() {
            f.write_str("PasswordSecret(**redacted**)")
        } else {
            f.write_str("PasswordSecret(unusable)")
        }
    }
}
