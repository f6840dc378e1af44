use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::AppError;

/// Video metadata record.
///
/// JSON names match the client contract (`thumbnailURL`, `userID`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub title: String,
    pub description: String,
    #[serde(rename = "thumbnailURL", skip_serializing_if = "Option::is_none", default)]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "videoURL", skip_serializing_if = "Option::is_none", default)]
    pub video_url: Option<String>,
    #[serde(rename = "userID")]
    pub user_id: Uuid,
}

impl Video {
    /// Copy of this record pointing at a new thumbnail; every other field is kept.
    pub fn with_thumbnail_url(&self, thumbnail_url: String) -> Self {
        Video {
            thumbnail_url: Some(thumbnail_url),
            ..self.clone()
        }
    }
}

/// Fields a client supplies when creating a video.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateVideoRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Validate a video identifier taken from a request path.
///
/// The identifier is opaque: it must not be blank, and is otherwise used
/// exactly as given.
pub fn parse_video_id(raw: &str) -> Result<&str, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::BadRequest("Invalid video ID".to_string()));
    }
    Ok(raw)
}
