//! Database setup and initialization

use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tubely_core::Config;

/// Open the connection pool and apply pending migrations.
pub async fn setup_database(config: &Config) -> Result<SqlitePool> {
    tracing::info!("Connecting to database...");
    let pool = tubely_db::connect(
        &config.database_url,
        config.db_max_connections,
        Duration::from_secs(config.db_timeout_seconds),
    )
    .await
    .context("Failed to connect to database")?;

    tracing::info!(
        max_connections = config.db_max_connections,
        "Database connected and migrations applied"
    );

    Ok(pool)
}
