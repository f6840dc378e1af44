use axum_test::multipart::{MultipartForm, Part};
use chrono::Utc;
use tubely_core::models::Video;
use tubely_db::SqliteVideoRepository;
use uuid::Uuid;

/// PNG signature followed by filler up to `size` bytes.
pub fn create_png_of_size(size: usize) -> Vec<u8> {
    const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    let mut data = SIGNATURE.to_vec();
    data.extend((0..size.saturating_sub(SIGNATURE.len())).map(|i| (i % 251) as u8));
    data.truncate(size);
    data
}

pub fn create_minimal_png() -> Vec<u8> {
    create_png_of_size(64)
}

/// Multipart form with a single file part named `thumbnail`.
pub fn thumbnail_form(data: Vec<u8>, mime_type: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "thumbnail",
        Part::bytes(data).file_name("thumbnail.png").mime_type(mime_type),
    )
}

/// Insert a video with a fixed identifier owned by `owner`.
pub async fn seed_video(repo: &SqliteVideoRepository, id: &str, owner: Uuid) -> Video {
    let now = Utc::now();
    let video = Video {
        id: id.to_string(),
        created_at: now,
        updated_at: now,
        title: "Boots".to_string(),
        description: "A video about boots".to_string(),
        thumbnail_url: None,
        video_url: None,
        user_id: owner,
    };
    repo.insert_video(&video).await.expect("Failed to seed video");
    video
}
