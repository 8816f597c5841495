//! Route definitions for admin authentication.
//!
//! Mounted at `/auth` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Auth routes.
///
/// ```text
/// POST /login -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(auth::login))
}
