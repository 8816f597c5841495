//! Route definitions for admin maintenance operations.
//!
//! Mounted at `/admin` by `api_routes()`. All handlers here require a
//! valid admin token.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Admin routes.
///
/// ```text
/// GET  /storage-status -> storage_status
/// POST /clear-data     -> clear_data
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/storage-status", get(admin::storage_status))
        .route("/clear-data", post(admin::clear_data))
}
