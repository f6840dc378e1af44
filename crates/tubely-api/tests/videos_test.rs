//! Video metadata and health integration tests.
//!
//! Run with: `cargo test -p tubely-api --test videos_test`

mod helpers;

use helpers::auth::create_test_user;
use helpers::setup_test_app;
use serde_json::json;
use tubely_core::models::Video;

#[tokio::test]
async fn test_create_video_then_fetch_it() {
    let app = setup_test_app().await;
    let user = create_test_user();

    let response = app
        .client()
        .post("/api/videos")
        .add_header("Authorization", user.bearer())
        .json(&json!({ "title": "Boots", "description": "A video about boots" }))
        .await;

    assert_eq!(response.status_code(), 201);
    let created: Video = response.json();
    assert_eq!(created.title, "Boots");
    assert_eq!(created.user_id, user.user_id);
    assert!(created.thumbnail_url.is_none());

    let response = app
        .client()
        .get(&format!("/api/videos/{}", created.id))
        .await;
    assert_eq!(response.status_code(), 200);
    let fetched: Video = response.json();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.description, "A video about boots");
}

#[tokio::test]
async fn test_created_video_accepts_thumbnail_from_owner() {
    let app = setup_test_app().await;
    let user = create_test_user();

    let created: Video = app
        .client()
        .post("/api/videos")
        .add_header("Authorization", user.bearer())
        .json(&json!({ "title": "Boots" }))
        .await
        .json();

    let response = app
        .client()
        .post(&format!("/api/thumbnails/{}", created.id))
        .add_header("Authorization", user.bearer())
        .multipart(helpers::fixtures::thumbnail_form(
            helpers::fixtures::create_minimal_png(),
            "image/png",
        ))
        .await;

    assert_eq!(response.status_code(), 200);
    let updated: Video = response.json();
    assert_eq!(
        updated.thumbnail_url,
        Some(format!("http://localhost:8091/api/thumbnails/{}", created.id))
    );
    assert_eq!(updated.title, "Boots");
}

#[tokio::test]
async fn test_create_video_requires_token() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post("/api/videos")
        .json(&json!({ "title": "Boots" }))
        .await;

    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn test_create_video_rejects_blank_title() {
    let app = setup_test_app().await;
    let user = create_test_user();

    let response = app
        .client()
        .post("/api/videos")
        .add_header("Authorization", user.bearer())
        .json(&json!({ "title": "   " }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_create_video_rejects_malformed_body() {
    let app = setup_test_app().await;
    let user = create_test_user();

    let response = app
        .client()
        .post("/api/videos")
        .add_header("Authorization", user.bearer())
        .json(&json!({ "description": "no title" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_get_unknown_video_is_not_found() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/videos/NOPE").await;

    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn test_health_reports_database_and_thumbnail_count() {
    let app = setup_test_app().await;

    let response = app.client().get("/health").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "healthy");
    assert_eq!(body["thumbnails"], 0);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app().await;

    let response = app.client().get("/api/openapi.json").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert!(body["paths"].get("/api/thumbnails/{video_id}").is_some());
}
