//! Database module
//!
//! This module handles database connections, migrations, repositories and
//! the startup bootstrap of the default admin account.

pub mod connection;
pub mod repositories;

use sqlx::PgPool;

pub use connection::*;

use crate::{
    config::BootstrapConfig,
    constants::roles,
    error::{AppError, AppResult},
    utils::crypto,
};

use repositories::{RoleRepository, UserRepository};

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Ensure the default admin account exists.
///
/// Role rows are seeded by migration; this only creates the admin user from
/// `ADMIN_EMAIL` / `ADMIN_PASSWORD`. With no password configured the step is
/// skipped so fresh deployments are not seeded with a known credential.
pub async fn bootstrap_admin(pool: &PgPool, config: &BootstrapConfig) -> AppResult<()> {
    if config.admin_password.is_empty() {
        tracing::warn!("ADMIN_PASSWORD not set; skipping default admin bootstrap");
        return Ok(());
    }

    if UserRepository::find_by_email(pool, &config.admin_email)
        .await?
        .is_some()
    {
        return Ok(());
    }

    let admin_role = RoleRepository::find_by_name(pool, roles::ADMIN)
        .await?
        .ok_or_else(|| AppError::Configuration("admin role missing; migrations not run?".to_string()))?;

    let password_hash = crypto::hash_password(&config.admin_password)?;
    let admin = UserRepository::create(
        pool,
        &config.admin_name,
        &config.admin_email,
        &password_hash,
        &admin_role.id,
        None,
    )
    .await?;

    tracing::info!(email = %admin.email, "Default admin account created");
    Ok(())
}
