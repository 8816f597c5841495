//! Route definitions for the video catalog.
//!
//! Mounted at `/videos` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::videos;
use crate::state::AppState;

/// Videos routes.
///
/// ```text
/// GET    /        -> list_videos (?q, category)
/// POST   /        -> create_video
/// GET    /{id}    -> get_video
/// DELETE /{id}    -> delete_video
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(videos::list_videos).post(videos::create_video))
        .route("/{id}", get(videos::get_video).delete(videos::delete_video))
}
