//! Member account commands.
//!
//! # Usage
//!
//! ```bash
//! att-manage createuser -e traveler@abletotrip.com
//! att-manage createsuperuser -e admin@abletotrip.com -p 'secret'
//! att-manage changepassword -e traveler@abletotrip.com -p 'secret'
//! ```

use std::sync::Arc;

use anyhow::bail;
use att_core::services::{BcryptPasswordHasher, UserManager};
use att_infra::database::MySqlUserRepository;
use att_shared::email::{is_valid_email, mask_email};
use att_shared::AppConfig;

type Manager = UserManager<MySqlUserRepository, BcryptPasswordHasher>;

/// Reject malformed administrator addresses before touching the database
fn check_email(email: &str) -> anyhow::Result<()> {
    if !is_valid_email(email.trim()) {
        bail!("invalid email address: {}", email);
    }
    Ok(())
}

async fn manager(config: &AppConfig, alias: &str) -> anyhow::Result<Manager> {
    let registry = super::open(config, alias).await?;
    let manager = UserManager::new(
        Arc::new(MySqlUserRepository::new(registry)),
        Arc::new(BcryptPasswordHasher::new(&config.password)),
    );
    Ok(manager.db_manager(alias))
}

/// Create a regular member
pub async fn create_user(
    config: &AppConfig,
    alias: &str,
    email: &str,
    password: Option<&str>,
) -> anyhow::Result<()> {
    let user = manager(config, alias).await?.create_user(email, password).await?;
    tracing::info!(
        user_id = %user.id,
        email = %mask_email(user.email.as_str()),
        usable_password = user.has_usable_password(),
        "Member created successfully!"
    );
    Ok(())
}

/// Create an administrator
pub async fn create_superuser(
    config: &AppConfig,
    alias: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    check_email(email)?;
    if password.is_empty() {
        bail!("superuser password must not be empty");
    }

    let user = manager(config, alias).await?.create_superuser(email, password).await?;
    tracing::info!(
        user_id = %user.id,
        email = %mask_email(user.email.as_str()),
        "Superuser created successfully!"
    );
    Ok(())
}

/// Replace a member's password
pub async fn change_password(
    config: &AppConfig,
    alias: &str,
    email: &str,
    password: &str,
) -> anyhow::Result<()> {
    let user = manager(config, alias)
        .await?
        .change_password(email, Some(password))
        .await?;
    tracing::info!(user_id = %user.id, "Password changed successfully!");
    Ok(())
}
