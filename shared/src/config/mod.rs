//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Password hashing configuration
//! - `database` - Database connection, pool and alias configuration
//! - `environment` - Environment detection and logging configuration

pub mod auth;
pub mod database;
pub mod environment;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::PasswordConfig;
pub use database::{DatabaseConfig, DatabasesConfig, DEFAULT_DB_ALIAS};
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Database connections keyed by alias
    pub databases: DatabasesConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            databases: DatabasesConfig::default(),
            password: PasswordConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            databases: DatabasesConfig::new(DatabaseConfig::new(
                "mysql://localhost:3306/abletotrip_dev",
            )),
            password: PasswordConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file first when one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        Self {
            environment,
            databases: DatabasesConfig::from_env(),
            password: PasswordConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_has_default_alias() {
        let config = AppConfig::default();
        assert!(config.databases.get(DEFAULT_DB_ALIAS).is_some());
        assert_eq!(config.environment, Environment::Development);
    }

    #[test]
    fn test_development_config() {
        let config = AppConfig::development();
        let default_db = config.databases.default_database();
        assert!(default_db.url.ends_with("abletotrip_dev"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.password.bcrypt_cost, config.password.bcrypt_cost);
        assert_eq!(parsed.databases.aliases(), config.databases.aliases());
    }
}
