//! Subcommand implementations

pub mod migrate;
pub mod user;

use std::sync::Arc;

use anyhow::Context;
use att_infra::database::{DatabasePool, DatabaseRegistry};
use att_shared::AppConfig;

/// Connection pools for every configured alias; only `alias` is checked
pub async fn open(config: &AppConfig, alias: &str) -> anyhow::Result<Arc<DatabaseRegistry>> {
    let registry = DatabaseRegistry::connect_lazy(&config.databases)
        .context("failed to configure database pools")?;

    let pool: &DatabasePool = registry.require(alias)?;
    pool.health_check()
        .await
        .with_context(|| format!("database '{}' is unreachable", alias))?;
    tracing::info!(db = %alias, stats = %pool.get_statistics(), "Connected to database");

    Ok(Arc::new(registry))
}
