//! Shared test harness for API integration tests.
//!
//! Builds the full application router against a throwaway content store
//! so every test exercises the same middleware stack that production uses.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use academy_api::auth::jwt::{generate_access_token, JwtConfig};
use academy_api::auth::password::hash_password;
use academy_api::config::{AdminConfig, ServerConfig};
use academy_api::router::build_app_router;
use academy_api::state::AppState;
use academy_store::FileStore;

/// Admin credentials used by the test configuration.
pub const TEST_ADMIN_EMAIL: &str = "admin@greatacademy.com";
pub const TEST_ADMIN_PASSWORD: &str = "admin123";

/// Build a test `ServerConfig` with safe defaults and a known JWT secret.
pub fn test_config(data_dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        data_dir: data_dir.to_path_buf(),
        admin: AdminConfig {
            email: TEST_ADMIN_EMAIL.to_string(),
            password_hash: hash_password(TEST_ADMIN_PASSWORD)
                .expect("hashing test password must succeed"),
        },
        jwt: JwtConfig {
            secret: "test-secret-do-not-use-in-production".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router backed by a temp-dir content store.
///
/// Returns the router together with the [`TempDir`] guard; dropping the
/// guard deletes the store, so keep it alive for the test's duration.
pub fn build_test_app() -> (Router, TempDir) {
    let dir = TempDir::new().expect("failed to create temp data dir");
    let config = test_config(dir.path());

    let store = FileStore::open(dir.path()).expect("failed to open test store");
    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config.clone()),
    };

    (build_app_router(state, &config), dir)
}

/// Rebuild the app over an existing data directory.
///
/// Handlers load the store fresh on every request, so this is only needed
/// because `oneshot` consumes the router; state lives in the directory.
pub fn rebuild_app(dir: TempDir) -> (Router, TempDir) {
    let config = test_config(dir.path());
    let store = FileStore::open(dir.path()).expect("failed to reopen test store");
    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config.clone()),
    };
    (build_app_router(state, &config), dir)
}

/// Mint a valid admin bearer token for the test configuration.
pub fn admin_token() -> String {
    let config = JwtConfig {
        secret: "test-secret-do-not-use-in-production".to_string(),
        access_token_expiry_mins: 60,
    };
    generate_access_token(TEST_ADMIN_EMAIL, &config).expect("token generation must succeed")
}

/// Send a GET request to the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body and an admin bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request with an admin bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request without credentials.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a GET request with an admin bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Read the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read response body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("response body must be valid JSON")
}

/// Assert the response is an error with the given status and `code` field.
pub async fn assert_error(response: Response<Body>, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code);
    assert!(json["error"].is_string());
}
