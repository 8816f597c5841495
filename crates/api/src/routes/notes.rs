//! Route definitions for the notes catalog.
//!
//! Mounted at `/notes` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Notes routes.
///
/// ```text
/// GET    /        -> list_notes (?q, category)
/// POST   /        -> create_note
/// GET    /{id}    -> get_note
/// DELETE /{id}    -> delete_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list_notes).post(notes::create_note))
        .route("/{id}", get(notes::get_note).delete(notes::delete_note))
}
