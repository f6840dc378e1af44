//! Application setup and initialization
//!
//! Kept out of main.rs so integration tests can build the same router.

pub mod database;
pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::Result;
use tubely_core::Config;
use tubely_db::SqliteVideoRepository;
use tubely_storage::InMemoryThumbnailStore;

use crate::state::AppState;

/// Initialize the entire application from a `Config` already checked by
/// `Config::from_env`.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(config.is_production());

    tracing::info!(
        environment = %config.environment,
        public_base_url = %config.public_base_url,
        "Configuration loaded"
    );

    let pool = database::setup_database(&config).await?;

    let state = Arc::new(AppState::new(
        config.clone(),
        Arc::new(SqliteVideoRepository::new(pool)),
        Arc::new(InMemoryThumbnailStore::new()),
    ));

    let router = routes::build_router(&config, state.clone())?;

    Ok((state, router))
}
