//! Handlers for the notes catalog.
//!
//! Listings always return the merge of uploaded notes with the shipped seed
//! notes (uploads first, seed winning on id collision), optionally narrowed
//! by the `?q=&category=` filter. Uploading and deleting require an admin
//! token; uploads validate the form fields and deletes are idempotent.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use academy_core::catalog::{filter_catalog, merge_with_seed};
use academy_core::error::CoreError;
use academy_core::note::{CreateNote, Note};
use academy_core::seed::seed_notes;
use academy_store::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::query::CatalogQuery;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /notes?q=&category=
///
/// List the merged notes catalog, filtered by search term and category.
pub async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> AppResult<impl IntoResponse> {
    let uploaded = NoteRepo::load(&state.store).await?;
    let merged = merge_with_seed(uploaded, seed_notes());
    let notes = filter_catalog(merged, query.search(), query.category());

    Ok(Json(DataResponse { data: notes }))
}

/// GET /notes/{id}
///
/// Look up a single note in the merged catalog.
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let uploaded = NoteRepo::load(&state.store).await?;
    let merged = merge_with_seed(uploaded, seed_notes());

    let note = merged
        .into_iter()
        .find(|n| n.id == id)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;

    Ok(Json(DataResponse { data: note }))
}

/// POST /notes
///
/// Create a note from an upload form payload. The id and upload date are
/// assigned server-side.
pub async fn create_note(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateNote>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let note = NoteRepo::append(&state.store, Note::from_upload(input)).await?;

    tracing::info!(
        admin = %admin.email,
        note_id = %note.id,
        category = %note.category,
        "Note uploaded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}

/// DELETE /notes/{id}
///
/// Remove a note from the uploaded-notes document. Idempotent: deleting an
/// absent id (including any seed id, which is never persisted) is a no-op.
pub async fn delete_note(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let removed = NoteRepo::remove(&state.store, &id).await?;

    tracing::info!(admin = %admin.email, note_id = %id, removed, "Note delete requested");

    Ok(StatusCode::NO_CONTENT)
}
