//! Trait definitions for the credential-hashing collaborator

use crate::domain::value_objects::PasswordSecret;
use crate::errors::DomainResult;

/// One-way password hashing
pub trait PasswordHasher: Send + Sync {
    /// Algorithm identifier, for logs
    fn algorithm(&self) -> &'static str;

    /// Hash a plaintext password
    fn hash(&self, raw: &str) -> DomainResult<PasswordSecret>;

    /// Check a plaintext password against a usable secret
    fn verify(&self, raw: &str, secret: &PasswordSecret) -> DomainResult<bool>;
}

/// Hash `raw`, or produce an unusable secret when no password is given
pub fn make_password<H>(hasher: &H, raw: Option<&str>) -> DomainResult<PasswordSecret>
where
    H: PasswordHasher + ?Sized,
{
    match raw {
        Some(raw) => hasher.hash(raw),
        None => Ok(PasswordSecret::unusable()),
    }
}

/// Verify `raw`; unusable secrets never match
pub fn check_password<H>(hasher: &H, raw: &str, secret: &PasswordSecret) -> DomainResult<bool>
where
    H: PasswordHasher + ?Sized,
{
    if !secret.is_usable() {
        return Ok(false);
    }
    hasher.verify(raw, secret)
}
