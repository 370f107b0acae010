//! bcrypt-backed password hasher

use att_shared::PasswordConfig;
use tracing::debug;

use crate::domain::value_objects::PasswordSecret;
use crate::errors::{DomainError, DomainResult, ValidationError};

use super::traits::PasswordHasher;

/// bcrypt ignores every byte past this many
pub const BCRYPT_MAX_PASSWORD_BYTES: usize = 72;

/// Hashes passwords with bcrypt at a configurable work factor
#[derive(Debug, Clone)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new(config: &PasswordConfig) -> Self {
        Self {
            cost: config.bcrypt_cost,
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn algorithm(&self) -> &'static str {
        "bcrypt"
    }

    fn hash(&self, raw: &str) -> DomainResult<PasswordSecret> {
        if raw.len() > BCRYPT_MAX_PASSWORD_BYTES {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                max: BCRYPT_MAX_PASSWORD_BYTES,
                actual: raw.len(),
            }
            .into());
        }
        let encoded = bcrypt::hash(raw, self.cost).map_err(|e| DomainError::Hashing {
            message: e.to_string(),
        })?;
        Ok(PasswordSecret::from_encoded(encoded))
    }

    fn verify(&self, raw: &str, secret: &PasswordSecret) -> DomainResult<bool> {
        // Such a password was never hashed, and bcrypt would compare only its prefix
        if raw.len() > BCRYPT_MAX_PASSWORD_BYTES {
            return Ok(false);
        }
        match bcrypt::verify(raw, secret.as_encoded()) {
            Ok(matches) => Ok(matches),
            // Secrets written by another algorithm simply do not match
            Err(bcrypt::BcryptError::InvalidHash(_)) | Err(bcrypt::BcryptError::InvalidPrefix(_)) => {
                debug!("stored secret is not a bcrypt hash");
                Ok(false)
            }
            Err(e) => Err(DomainError::Hashing {
                message: e.to_string(),
            }),
        }
    }
}
