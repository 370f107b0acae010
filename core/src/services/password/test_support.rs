//! Deterministic hashers for unit tests

use crate::domain::value_objects::PasswordSecret;
use crate::errors::{DomainError, DomainResult};

use super::traits::PasswordHasher;

/// Reversible "hash" so tests do not pay for bcrypt
pub struct PlainTextHasher;

impl PasswordHasher for PlainTextHasher {
    fn algorithm(&self) -> &'static str {
        "plain"
    }

    fn hash(&self, raw: &str) -> DomainResult<PasswordSecret> {
        Ok(PasswordSecret::from_encoded(format!("plain${}", raw)))
    }

    fn verify(&self, raw: &str, secret: &PasswordSecret) -> DomainResult<bool> {
        Ok(secret.as_encoded() == format!("plain${}", raw))
    }
}

/// Hasher whose every call fails
pub struct FailingHasher;

impl PasswordHasher for FailingHasher {
    fn algorithm(&self) -> &'static str {
        "failing"
    }

    fn hash(&self, _raw: &str) -> DomainResult<PasswordSecret> {
        Err(DomainError::Hashing {
            message: "hasher unavailable".to_string(),
        })
    }

    fn verify(&self, _raw: &str, _secret: &PasswordSecret) -> DomainResult<bool> {
        Err(DomainError::Hashing {
            message: "hasher unavailable".to_string(),
        })
    }
}
