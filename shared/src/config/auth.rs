//! Password hashing configuration

use serde::{Deserialize, Serialize};

/// Lowest work factor accepted by bcrypt
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest work factor accepted by bcrypt
pub const MAX_BCRYPT_COST: u32 = 31;

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt work factor
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl PasswordConfig {
    /// Create from environment variables (`PASSWORD_BCRYPT_COST`)
    pub fn from_env() -> Self {
        let bcrypt_cost = std::env::var("PASSWORD_BCRYPT_COST")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(default_bcrypt_cost);

        Self::with_cost(bcrypt_cost)
    }

    /// Create a configuration with the given cost, clamped to bcrypt's range
    pub fn with_cost(cost: u32) -> Self {
        Self {
            bcrypt_cost: cost.clamp(MIN_BCRYPT_COST, MAX_BCRYPT_COST),
        }
    }
}

fn default_bcrypt_cost() -> u32 {
    12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cost() {
        assert_eq!(PasswordConfig::default().bcrypt_cost, 12);
    }

    #[test]
    fn test_cost_is_clamped() {
        assert_eq!(PasswordConfig::with_cost(1).bcrypt_cost, MIN_BCRYPT_COST);
        assert_eq!(PasswordConfig::with_cost(99).bcrypt_cost, MAX_BCRYPT_COST);
        assert_eq!(PasswordConfig::with_cost(10).bcrypt_cost, 10);
    }
}
