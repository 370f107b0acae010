//! Alias to pool mapping for multi-database setups

use std::collections::BTreeMap;

use att_shared::DatabasesConfig;

use super::connection::DatabasePool;
use crate::InfrastructureError;

/// Every configured connection pool, keyed by alias
#[derive(Clone, Default)]
pub struct DatabaseRegistry {
    pools: BTreeMap<String, DatabasePool>,
}

impl DatabaseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a pool for every configured alias
    ///
    /// Fails on the first alias that cannot be reached.
    pub async fn connect(config: &DatabasesConfig) -> Result<Self, InfrastructureError> {
        let mut registry = Self::new();
        for (alias, database) in config.iter() {
            let pool = DatabasePool::new(alias, database.clone()).await?;
            registry.register(pool);
        }
        tracing::info!(aliases = ?registry.aliases(), "Database registry ready");
        Ok(registry)
    }

    /// Build a pool for every alias without connecting yet
    pub fn connect_lazy(config: &DatabasesConfig) -> Result<Self, InfrastructureError> {
        let mut registry = Self::new();
        for (alias, database) in config.iter() {
            registry.register(DatabasePool::new_lazy(alias, database.clone())?);
        }
        Ok(registry)
    }

    /// Add a pool, replacing any pool already registered under its alias
    pub fn register(&mut self, pool: DatabasePool) {
        self.pools.insert(pool.alias().to_string(), pool);
    }

    pub fn get(&self, alias: &str) -> Option<&DatabasePool> {
        self.pools.get(alias)
    }

    /// Pool for `alias`, or a configuration error naming it
    pub fn require(&self, alias: &str) -> Result<&DatabasePool, InfrastructureError> {
        self.get(alias).ok_or_else(|| {
            InfrastructureError::Config(format!("database alias '{}' is not configured", alias))
        })
    }

    pub fn aliases(&self) -> Vec<&str> {
        self.pools.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Close every pool
    pub async fn close_all(&self) {
        for pool in self.pools.values() {
            pool.close().await;
        }
    }
}
