//! MySQL implementation of the UserRepository trait.
//!
//! This module provides the concrete implementation of member persistence
//! using MySQL with SQLx. Each call is routed to the pool registered for the
//! requested database alias.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use att_core::domain::entities::user::User;
use att_core::domain::value_objects::{Email, PasswordSecret};
use att_core::errors::DomainError;
use att_core::repositories::UserRepository;

use crate::database::DatabaseRegistry;

const USER_COLUMNS: &str = "id, password, last_login, email, is_active, is_admin, \
                            address, longitude, latitude";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Connection pools keyed by alias
    registry: Arc<DatabaseRegistry>,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `registry` - Connection pools for every configured alias
    pub fn new(registry: Arc<DatabaseRegistry>) -> Self {
        Self { registry }
    }

    /// Resolve the pool for `using`
    fn pool(&self, using: &str) -> Result<&MySqlPool, DomainError> {
        self.registry
            .get(using)
            .map(|pool| pool.get_pool())
            .ok_or_else(|| DomainError::UnknownDatabase {
                alias: using.to_string(),
            })
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(|e| column_error("id", e))?;
        let email: String = row.try_get("email").map_err(|e| column_error("email", e))?;
        let password: String = row
            .try_get("password")
            .map_err(|e| column_error("password", e))?;

        let mut user = User::new(Email::parse(&email).map_err(|e| DomainError::Storage {
            message: format!("Stored email is invalid: {}", e),
        })?)
        .with_password_secret(PasswordSecret::from_encoded(password));

        user.id = Uuid::parse_str(&id).map_err(|e| DomainError::Storage {
            message: format!("Invalid UUID: {}", e),
        })?;
        user.last_login = row
            .try_get::<Option<DateTime<Utc>>, _>("last_login")
            .map_err(|e| column_error("last_login", e))?;
        user.is_active = row
            .try_get("is_active")
            .map_err(|e| column_error("is_active", e))?;
        user.is_admin = row
            .try_get("is_admin")
            .map_err(|e| column_error("is_admin", e))?;
        user.address = row
            .try_get("address")
            .map_err(|e| column_error("address", e))?;
        user.longitude = row
            .try_get("longitude")
            .map_err(|e| column_error("longitude", e))?;
        user.latitude = row
            .try_get("latitude")
            .map_err(|e| column_error("latitude", e))?;

        Ok(user)
    }
}

fn column_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::Storage {
        message: format!("Failed to get {}: {}", column, e),
    }
}

/// Field behind the key named in a MySQL duplicate-entry message
///
/// The message quotes the offending value first, so only the trailing
/// `for key '...'` clause is inspected. MySQL 8 prefixes the key with the
/// table name.
fn duplicate_key_field(message: &str) -> &'static str {
    let key = message
        .rsplit_once(" for key '")
        .map(|(_, key)| key.trim_end_matches('\''))
        .unwrap_or_default();

    if key == "PRIMARY" || key.ends_with(".PRIMARY") {
        "id"
    } else {
        "email"
    }
}

/// Map a failed write, turning duplicate keys into unique violations
fn write_error(action: &str, e: sqlx::Error) -> DomainError {
    if let Some(db_error) = e.as_database_error() {
        if db_error.is_unique_violation() {
            return DomainError::UniqueViolation {
                field: duplicate_key_field(db_error.message()).to_string(),
            };
        }
    }
    tracing::error!(error = %e, "Failed to {}", action);
    DomainError::Storage {
        message: format!("Failed to {}: {}", action, e),
    }
}

fn query_error(e: sqlx::Error) -> DomainError {
    DomainError::Storage {
        message: format!("Database query failed: {}", e),
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid, using: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM member_user WHERE id = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(self.pool(using)?)
            .await
            .map_err(query_error)?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_email(&self, email: &str, using: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM member_user WHERE email = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(self.pool(using)?)
            .await
            .map_err(query_error)?;

        result.as_ref().map(Self::row_to_user).transpose()
    }

    async fn exists_by_email(&self, email: &str, using: &str) -> Result<bool, DomainError> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM member_user WHERE email = ?
            ) as user_exists
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(self.pool(using)?)
            .await
            .map_err(query_error)?;

        let exists: i64 = row
            .try_get("user_exists")
            .map_err(|e| column_error("user_exists", e))?;

        Ok(exists == 1)
    }

    async fn create(&self, user: User, using: &str) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO member_user (
                id, password, last_login, email, is_active, is_admin,
                address, longitude, latitude
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(user.password().as_encoded())
            .bind(user.last_login)
            .bind(user.email.as_str())
            .bind(user.is_active)
            .bind(user.is_admin)
            .bind(&user.address)
            .bind(user.longitude)
            .bind(user.latitude)
            .execute(self.pool(using)?)
            .await
            .map_err(|e| write_error("create user", e))?;

        Ok(user)
    }

    async fn update(&self, user: User, using: &str) -> Result<User, DomainError> {
        let query = r#"
            UPDATE member_user SET
                password = ?,
                last_login = ?,
                email = ?,
                is_active = ?,
                is_admin = ?,
                address = ?,
                longitude = ?,
                latitude = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(user.password().as_encoded())
            .bind(user.last_login)
            .bind(user.email.as_str())
            .bind(user.is_active)
            .bind(user.is_admin)
            .bind(&user.address)
            .bind(user.longitude)
            .bind(user.latitude)
            .bind(user.id.to_string())
            .execute(self.pool(using)?)
            .await
            .map_err(|e| write_error("update user", e))?;

        // An update that changes nothing also reports zero rows
        if result.rows_affected() == 0 && self.find_by_id(user.id, using).await?.is_none() {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        Ok(user)
    }

    async fn delete(&self, id: Uuid, using: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM member_user WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool(using)?)
            .await
            .map_err(|e| write_error("delete user", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_by_admin(&self, is_admin: Option<bool>, using: &str) -> Result<u64, DomainError> {
        let pool = self.pool(using)?;
        let result = match is_admin {
            Some(flag) => {
                sqlx::query("SELECT COUNT(*) as count FROM member_user WHERE is_admin = ?")
                    .bind(flag)
                    .fetch_one(pool)
                    .await
            }
            None => {
                sqlx::query("SELECT COUNT(*) as count FROM member_user")
                    .fetch_one(pool)
                    .await
            }
        };

        let row = result.map_err(query_error)?;
        let count: i64 = row.try_get("count").map_err(|e| column_error("count", e))?;

        Ok(count as u64)
    }
}
