//! HTTP-level integration tests for the video catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, assert_error, body_json, delete_auth, get, post_json_auth, rebuild_app,
};

fn sample_video() -> serde_json::Value {
    serde_json::json!({
        "title": "Pronunciation Drills",
        "description": "Practice difficult English sounds",
        "category": "Foundation",
        "duration": "12:30",
        "instructor": "Priya Ma'am",
        "url": "https://example.com/pronunciation"
    })
}

// ---------------------------------------------------------------------------
// Listing and merge order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_store_lists_seed_videos() {
    let (app, _dir) = common::build_test_app();
    let json = body_json(get(app, "/api/v1/videos").await).await;

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 4);
    assert_eq!(data[0]["title"], "Basic Grammar Introduction");
    assert_eq!(data[0]["instructor"], "Ankit Sir");
    assert!(data[0]["thumbnail"].is_string());
}

#[tokio::test]
async fn uploaded_videos_are_listed_before_seed_videos() {
    let (app, dir) = common::build_test_app();
    let token = admin_token();

    let response = post_json_auth(app, "/api/v1/videos", sample_video(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let (app, _dir) = rebuild_app(dir);
    let json = body_json(get(app, "/api/v1/videos").await).await;
    let data = json["data"].as_array().unwrap();

    assert_eq!(data.len(), 5);
    assert_eq!(data[0]["title"], "Pronunciation Drills");
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_matches_description_text() {
    let (app, _dir) = common::build_test_app();
    let json = body_json(get(app, "/api/v1/videos?q=email").await).await;

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "Professional Email Writing");
}

#[tokio::test]
async fn category_filter_narrows_results() {
    let (app, _dir) = common::build_test_app();
    let json = body_json(get(app, "/api/v1/videos?category=Social").await).await;

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["category"], "Social");
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_video_returns_201_with_default_thumbnail() {
    let (app, _dir) = common::build_test_app();
    let token = admin_token();

    let response = post_json_auth(app, "/api/v1/videos", sample_video(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let video = &json["data"];
    assert!(video["id"].is_string());
    assert_eq!(video["views"], 0);
    // No thumbnail supplied, so the stock one is applied.
    assert!(video["thumbnail"].as_str().unwrap().starts_with("https://"));
}

#[tokio::test]
async fn create_video_with_unknown_instructor_returns_400() {
    let (app, _dir) = common::build_test_app();
    let token = admin_token();

    let mut body = sample_video();
    body["instructor"] = serde_json::json!("Nobody Sir");
    let response = post_json_auth(app, "/api/v1/videos", body, &token).await;

    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

#[tokio::test]
async fn create_video_with_missing_duration_returns_400() {
    let (app, _dir) = common::build_test_app();
    let token = admin_token();

    let mut body = sample_video();
    body["duration"] = serde_json::json!("");
    let response = post_json_auth(app, "/api/v1/videos", body, &token).await;

    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

// ---------------------------------------------------------------------------
// Get and delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_unknown_video_returns_404() {
    let (app, _dir) = common::build_test_app();
    let response = get(app, "/api/v1/videos/999999").await;

    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[tokio::test]
async fn delete_video_is_idempotent() {
    let (app, dir) = common::build_test_app();
    let token = admin_token();

    let created =
        body_json(post_json_auth(app, "/api/v1/videos", sample_video(), &token).await).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (app, dir) = rebuild_app(dir);
    let response = delete_auth(app, &format!("/api/v1/videos/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (app, _dir) = rebuild_app(dir);
    let response = delete_auth(app, &format!("/api/v1/videos/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
