//! Password hashing port and its bcrypt implementation.

mod bcrypt_hasher;
mod traits;

#[cfg(test)]
pub(crate) mod test_support;

pub use bcrypt_hasher::{BcryptPasswordHasher, BCRYPT_MAX_PASSWORD_BYTES};
pub use traits::{check_password, make_password, PasswordHasher};
