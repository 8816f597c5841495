pub mod admin;
pub mod auth;
pub mod courses;
pub mod health;
pub mod notes;
pub mod videos;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                 login (public)
///
/// /notes                      list (public), create (admin)
/// /notes/{id}                 get (public), delete (admin)
///
/// /videos                     list (public), create (admin)
/// /videos/{id}                get (public), delete (admin)
///
/// /courses                    list (public), create (admin)
/// /courses/{id}               get (public), delete (admin)
///
/// /admin/storage-status       store diagnostics (admin)
/// /admin/clear-data           wipe uploaded documents (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/notes", notes::router())
        .nest("/videos", videos::router())
        .nest("/courses", courses::router())
        .nest("/admin", admin::router())
}
