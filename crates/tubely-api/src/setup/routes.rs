//! Route configuration and setup.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tubely_core::{constants::API_BASE, Config};
use utoipa::OpenApi;

use crate::api_doc::ApiDoc;
use crate::handlers::{health, thumbnail_get, thumbnail_upload, videos};
use crate::state::AppState;

/// Room for multipart boundaries and headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 1 << 20;

/// Build the application router.
pub fn build_router(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;
    crate::error::set_hide_error_details(config.is_production());
    let body_limit = config.max_thumbnail_size_bytes + MULTIPART_OVERHEAD_BYTES;

    let api_routes = Router::new()
        .route(
            "/thumbnails/{video_id}",
            get(thumbnail_get::get_thumbnail).post(thumbnail_upload::upload_thumbnail),
        )
        .route(
            "/thumbnails",
            get(thumbnail_get::missing_video_id).post(thumbnail_get::missing_video_id),
        )
        .route(
            "/thumbnails/",
            get(thumbnail_get::missing_video_id).post(thumbnail_get::missing_video_id),
        )
        .route("/videos", axum::routing::post(videos::create_video))
        .route("/videos/{video_id}", get(videos::get_video))
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }));

    let router = Router::new()
        .nest(API_BASE, api_routes)
        .route("/health", get(health::health_check))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(router)
}

fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins = config
            .cors_origins
            .iter()
            .map(|o| o.parse::<HeaderValue>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?;
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}
