use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Sqlite, SqlitePool};
use tubely_core::{
    models::{CreateVideoRequest, Video},
    AppError,
};
use uuid::Uuid;

/// Video metadata store.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Fetch a video by identifier; `None` if it does not exist.
    async fn get_video(&self, id: &str) -> Result<Option<Video>, AppError>;

    /// Persist every mutable field of `video`. Fails with `NotFound` if no
    /// record has that identifier.
    async fn update_video(&self, video: &Video) -> Result<(), AppError>;

    /// Create a new video owned by `user_id`.
    async fn create_video(
        &self,
        user_id: Uuid,
        request: CreateVideoRequest,
    ) -> Result<Video, AppError>;

    /// Cheap round trip used by health checks.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Repository for video records backed by SQLite
#[derive(Clone)]
pub struct SqliteVideoRepository {
    pool: SqlitePool,
}

impl SqliteVideoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a video with a caller-chosen identifier.
    #[tracing::instrument(
        skip(self, video),
        fields(db.table = "videos", db.operation = "insert", db.record_id = %video.id)
    )]
    pub async fn insert_video(&self, video: &Video) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO videos
                (id, created_at, updated_at, title, description, thumbnail_url, video_url, user_id)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&video.id)
        .bind(video.created_at)
        .bind(video.updated_at)
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.thumbnail_url)
        .bind(&video.video_url)
        .bind(video.user_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl VideoRepository for SqliteVideoRepository {
    #[tracing::instrument(
        skip(self),
        fields(db.table = "videos", db.operation = "select", db.record_id = %id)
    )]
    async fn get_video(&self, id: &str) -> Result<Option<Video>, AppError> {
        let video = sqlx::query_as::<Sqlite, Video>(
            r#"
            SELECT id, created_at, updated_at, title, description, thumbnail_url, video_url, user_id
            FROM videos
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(video)
    }

    #[tracing::instrument(
        skip(self, video),
        fields(db.table = "videos", db.operation = "update", db.record_id = %video.id)
    )]
    async fn update_video(&self, video: &Video) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE videos
            SET updated_at = ?1, title = ?2, description = ?3, thumbnail_url = ?4, video_url = ?5
            WHERE id = ?6
            "#,
        )
        .bind(Utc::now())
        .bind(&video.title)
        .bind(&video.description)
        .bind(&video.thumbnail_url)
        .bind(&video.video_url)
        .bind(&video.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Couldn't find video".to_string()));
        }

        Ok(())
    }

    #[tracing::instrument(
        skip(self, request),
        fields(db.table = "videos", db.operation = "insert", user_id = %user_id)
    )]
    async fn create_video(
        &self,
        user_id: Uuid,
        request: CreateVideoRequest,
    ) -> Result<Video, AppError> {
        let now = Utc::now();
        let video = Video {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            title: request.title,
            description: request.description,
            thumbnail_url: None,
            video_url: None,
            user_id,
        };

        self.insert_video(&video).await?;
        Ok(video)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
