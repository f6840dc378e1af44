use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use tubely_core::{constants::THUMBNAIL_CACHE_CONTROL, models::parse_video_id, AppError};

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

/// Serve the stored thumbnail bytes for a video. No authentication.
#[utoipa::path(
    get,
    path = "/api/thumbnails/{video_id}",
    tag = "thumbnails",
    params(
        ("video_id" = String, Path, description = "Video ID")
    ),
    responses(
        (status = 200, description = "Thumbnail bytes", content_type = "application/octet-stream"),
        (status = 400, description = "Invalid video ID", body = ErrorResponse),
        (status = 404, description = "Video or thumbnail not found", body = ErrorResponse)
    )
)]
#[tracing::instrument(skip(state), fields(operation = "get_thumbnail"))]
pub async fn get_thumbnail(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
) -> Result<Response, HttpAppError> {
    let video_id = parse_video_id(&video_id)?;

    state
        .videos
        .get_video(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Couldn't find video".to_string()))?;

    let thumbnail = state
        .thumbnails
        .get(video_id)
        .await
        .ok_or_else(|| AppError::NotFound("Thumbnail not found".to_string()))?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, thumbnail.media_type.as_str())
        .header(header::CACHE_CONTROL, THUMBNAIL_CACHE_CONTROL)
        .body(Body::from(thumbnail.data))
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to build response");
            HttpAppError::from(AppError::Internal(e.to_string()))
        })?;

    Ok(response)
}

/// Thumbnail routes hit without an identifier.
pub async fn missing_video_id() -> HttpAppError {
    HttpAppError::from(AppError::BadRequest("Invalid video ID".to_string()))
}
