//! In-memory implementation of UserRepository for tests and local tooling

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use att_shared::DEFAULT_DB_ALIAS;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

type Table = HashMap<Uuid, User>;

/// In-memory user repository with one table per database alias
#[derive(Clone)]
pub struct MockUserRepository {
    databases: Arc<RwLock<HashMap<String, Table>>>,
}

impl MockUserRepository {
    /// Create a repository serving only the `default` alias
    pub fn new() -> Self {
        Self::with_aliases([DEFAULT_DB_ALIAS])
    }

    /// Create a repository serving the given aliases
    pub fn with_aliases<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let databases = aliases
            .into_iter()
            .map(|alias| (alias.into(), Table::new()))
            .collect();
        Self {
            databases: Arc::new(RwLock::new(databases)),
        }
    }

    /// Snapshot of every user stored under `alias`
    pub async fn users(&self, alias: &str) -> Vec<User> {
        let databases = self.databases.read().await;
        databases
            .get(alias)
            .map(|table| table.values().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn unknown(alias: &str) -> DomainError {
    DomainError::UnknownDatabase {
        alias: alias.to_string(),
    }
}

fn email_taken(table: &Table, user: &User) -> bool {
    table
        .values()
        .any(|u| u.id != user.id && u.email == user.email)
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid, using: &str) -> Result<Option<User>, DomainError> {
        let databases = self.databases.read().await;
        let table = databases.get(using).ok_or_else(|| unknown(using))?;
        Ok(table.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str, using: &str) -> Result<Option<User>, DomainError> {
        let databases = self.databases.read().await;
        let table = databases.get(using).ok_or_else(|| unknown(using))?;
        Ok(table.values().find(|u| u.email.as_str() == email).cloned())
    }

    async fn exists_by_email(&self, email: &str, using: &str) -> Result<bool, DomainError> {
        let databases = self.databases.read().await;
        let table = databases.get(using).ok_or_else(|| unknown(using))?;
        Ok(table.values().any(|u| u.email.as_str() == email))
    }

    async fn create(&self, user: User, using: &str) -> Result<User, DomainError> {
        let mut databases = self.databases.write().await;
        let table = databases.get_mut(using).ok_or_else(|| unknown(using))?;

        if table.contains_key(&user.id) {
            return Err(DomainError::UniqueViolation {
                field: "id".to_string(),
            });
        }
        if email_taken(table, &user) {
            return Err(DomainError::UniqueViolation {
                field: "email".to_string(),
            });
        }

        table.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User, using: &str) -> Result<User, DomainError> {
        let mut databases = self.databases.write().await;
        let table = databases.get_mut(using).ok_or_else(|| unknown(using))?;

        if !table.contains_key(&user.id) {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }
        if email_taken(table, &user) {
            return Err(DomainError::UniqueViolation {
                field: "email".to_string(),
            });
        }

        table.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid, using: &str) -> Result<bool, DomainError> {
        let mut databases = self.databases.write().await;
        let table = databases.get_mut(using).ok_or_else(|| unknown(using))?;
        Ok(table.remove(&id).is_some())
    }

    async fn count_by_admin(&self, is_admin: Option<bool>, using: &str) -> Result<u64, DomainError> {
        let databases = self.databases.read().await;
        let table = databases.get(using).ok_or_else(|| unknown(using))?;
        let count = match is_admin {
            Some(flag) => table.values().filter(|u| u.is_admin == flag).count(),
            None => table.len(),
        };
        Ok(count as u64)
    }
}
