use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    http::HeaderMap,
    Json,
};
use tubely_core::{
    authorize_owner,
    constants::THUMBNAIL_FIELD,
    models::{parse_video_id, Thumbnail, Video},
    thumbnail_url, AppError,
};

use crate::auth::authenticate;
use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::read_file_field;

/// Upload thumbnail handler
///
/// Stores the `thumbnail` part of a multipart body for a video the caller owns
/// and points the video's `thumbnailURL` at the fetch endpoint.
///
/// The thumbnail is written before the video record is updated. If the update
/// fails the new bytes stay in the store and the old URL is kept.
///
/// # Errors
/// - `AppError::BadRequest` - Blank video ID, missing file part, file too large or malformed form
/// - `AppError::Unauthorized` - Missing or invalid bearer token
/// - `AppError::Forbidden` - Video does not exist or belongs to another user
#[utoipa::path(
    post,
    path = "/api/thumbnails/{video_id}",
    tag = "thumbnails",
    params(
        ("video_id" = String, Path, description = "Video ID")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Thumbnail stored", body = Video),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller does not own the video", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
#[tracing::instrument(
    skip(state, headers, multipart),
    fields(video_id = %video_id, operation = "upload_thumbnail")
)]
pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Video>, HttpAppError> {
    let video_id = parse_video_id(&video_id)?;
    let user_id = authenticate(&headers, &state.config.jwt_secret)?;

    tracing::info!(user_id = %user_id, "uploading thumbnail");

    let multipart = multipart.map_err(|e| {
        AppError::BadRequest(format!("Unable to parse form: {}", e.body_text()))
    })?;
    let file = read_file_field(
        multipart,
        THUMBNAIL_FIELD,
        state.config.max_thumbnail_size_bytes,
    )
    .await?;

    let video = state
        .videos
        .get_video(video_id)
        .await?
        .filter(|video| authorize_owner(user_id, video.user_id).is_allowed())
        .ok_or_else(|| AppError::Forbidden("User does not own video".to_string()))?;

    let size = file.data.len();
    state
        .thumbnails
        .set(video_id, Thumbnail::new(file.data, file.content_type))
        .await;

    let url = thumbnail_url(&state.config.public_base_url, video_id);
    state
        .videos
        .update_video(&video.with_thumbnail_url(url))
        .await?;

    let updated = state
        .videos
        .get_video(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Couldn't find video".to_string()))?;

    tracing::info!(size, file_name = %file.file_name, "thumbnail stored");

    Ok(Json(updated))
}
