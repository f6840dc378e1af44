//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p tubely-api`. Every app gets its own
//! in-memory SQLite database and thumbnail store.

#![allow(dead_code)]

pub mod auth;
pub mod fixtures;

use std::sync::Arc;

use axum_test::TestServer;
use tubely_api::setup::routes;
use tubely_api::state::AppState;
use tubely_core::{constants::MAX_THUMBNAIL_SIZE_BYTES, Config};
use tubely_db::{connect_in_memory, SqliteVideoRepository};
use tubely_storage::{InMemoryThumbnailStore, ThumbnailStore};

/// Test application: server plus handles on the backing stores.
pub struct TestApp {
    pub server: TestServer,
    pub videos: Arc<SqliteVideoRepository>,
    pub thumbnails: Arc<InMemoryThumbnailStore>,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

pub fn create_test_config() -> Config {
    Config {
        server_port: 8091,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        db_timeout_seconds: 5,
        jwt_secret: auth::TEST_JWT_SECRET.to_string(),
        public_base_url: "http://localhost:8091".to_string(),
        max_thumbnail_size_bytes: MAX_THUMBNAIL_SIZE_BYTES,
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
    }
}

/// Setup test app with an isolated database and thumbnail store.
pub async fn setup_test_app() -> TestApp {
    let config = create_test_config();
    let pool = connect_in_memory()
        .await
        .expect("Failed to open in-memory database");

    let videos = Arc::new(SqliteVideoRepository::new(pool));
    let thumbnails = Arc::new(InMemoryThumbnailStore::new());

    let state = Arc::new(AppState::new(
        config.clone(),
        videos.clone(),
        thumbnails.clone() as Arc<dyn ThumbnailStore>,
    ));

    let router = routes::build_router(&config, state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to create test server");

    TestApp {
        server,
        videos,
        thumbnails,
    }
}
