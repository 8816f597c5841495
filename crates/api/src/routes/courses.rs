//! Route definitions for the course catalog.
//!
//! Mounted at `/courses` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::courses;
use crate::state::AppState;

/// Courses routes.
///
/// ```text
/// GET    /        -> list_courses (?q)
/// POST   /        -> create_course
/// GET    /{id}    -> get_course
/// DELETE /{id}    -> delete_course
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(courses::list_courses).post(courses::create_course))
        .route(
            "/{id}",
            get(courses::get_course).delete(courses::delete_course),
        )
}
