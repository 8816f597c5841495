//! HTTP-level integration tests for the course catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    admin_token, assert_error, body_json, delete_auth, get, post_json_auth, rebuild_app,
};

fn sample_course() -> serde_json::Value {
    serde_json::json!({
        "title": "Weekend Crash Course",
        "description": "Intensive spoken English weekends",
        "duration": "8 Weekends",
        "price": "₹1500"
    })
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn empty_store_lists_seed_courses() {
    let (app, _dir) = common::build_test_app();
    let json = body_json(get(app, "/api/v1/courses").await).await;

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["title"], "4-Months Complete Spoken English Course");
    assert_eq!(data[0]["originalPrice"], "₹6000");
    assert_eq!(data[0]["isActive"], true);
}

#[tokio::test]
async fn search_filters_courses_by_title() {
    let (app, _dir) = common::build_test_app();
    let json = body_json(get(app, "/api/v1/courses?q=foundation").await).await;

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "Basic Grammar Foundation");
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_course_applies_form_defaults() {
    let (app, _dir) = common::build_test_app();
    let token = admin_token();

    let response = post_json_auth(app, "/api/v1/courses", sample_course(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let course = &json["data"];
    assert_eq!(course["instructor"], "Ankit Sir");
    assert_eq!(course["category"], "Complete Course");
    // No strike-through price supplied, so it mirrors the price.
    assert_eq!(course["originalPrice"], "₹1500");
    assert_eq!(course["students"], "0");
    assert_eq!(course["isActive"], true);
}

#[tokio::test]
async fn created_course_is_listed_before_seed_courses() {
    let (app, dir) = common::build_test_app();
    let token = admin_token();

    post_json_auth(app, "/api/v1/courses", sample_course(), &token).await;

    let (app, _dir) = rebuild_app(dir);
    let json = body_json(get(app, "/api/v1/courses").await).await;
    let data = json["data"].as_array().unwrap();

    assert_eq!(data.len(), 3);
    assert_eq!(data[0]["title"], "Weekend Crash Course");
}

#[tokio::test]
async fn create_course_with_missing_price_returns_400() {
    let (app, _dir) = common::build_test_app();
    let token = admin_token();

    let mut body = sample_course();
    body["price"] = serde_json::json!("");
    let response = post_json_auth(app, "/api/v1/courses", body, &token).await;

    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

// ---------------------------------------------------------------------------
// Get and delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_seed_course_by_id() {
    let (app, _dir) = common::build_test_app();
    let response = get(app, "/api/v1/courses/2").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Basic Grammar Foundation");
}

#[tokio::test]
async fn get_unknown_course_returns_404() {
    let (app, _dir) = common::build_test_app();
    let response = get(app, "/api/v1/courses/999999").await;

    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

#[tokio::test]
async fn delete_course_removes_created_entry() {
    let (app, dir) = common::build_test_app();
    let token = admin_token();

    let created =
        body_json(post_json_auth(app, "/api/v1/courses", sample_course(), &token).await).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (app, dir) = rebuild_app(dir);
    let response = delete_auth(app, &format!("/api/v1/courses/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let (app, _dir) = rebuild_app(dir);
    let json = body_json(get(app, "/api/v1/courses").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);
}
