//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! att-manage migrate
//! att-manage migrate --database replica
//! ```

use att_shared::AppConfig;

/// Apply every pending migration to `alias`
pub async fn run(config: &AppConfig, alias: &str) -> anyhow::Result<()> {
    let registry = super::open(config, alias).await?;

    tracing::info!(db = %alias, "Running migrations...");
    registry.require(alias)?.run_migrations().await?;
    tracing::info!(db = %alias, "Migrations complete!");

    registry.close_all().await;
    Ok(())
}
