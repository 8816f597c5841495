//! Handlers for admin maintenance: storage diagnostics and clear-all-data.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use academy_store::repositories::{CourseRepo, NoteRepo, VideoRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Storage diagnostics payload.
#[derive(Debug, Serialize)]
pub struct StorageStatus {
    /// Whether the store passed a write/remove probe.
    pub store_writable: bool,
    /// Number of uploaded notes (excluding seed records).
    pub uploaded_notes: usize,
    /// Number of uploaded videos (excluding seed records).
    pub uploaded_videos: usize,
    /// Number of admin-created courses (excluding seed records).
    pub created_courses: usize,
}

/// GET /admin/storage-status
///
/// Report store health and per-catalog uploaded counts.
pub async fn storage_status(
    _admin: AuthAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let store_writable = state.store.health_check().await.is_ok();

    let status = StorageStatus {
        store_writable,
        uploaded_notes: NoteRepo::count(&state.store).await?,
        uploaded_videos: VideoRepo::count(&state.store).await?,
        created_courses: CourseRepo::count(&state.store).await?,
    };

    Ok(Json(DataResponse { data: status }))
}

/// POST /admin/clear-data
///
/// Delete every uploaded document. Seed records are unaffected; uploaded
/// records are unrecoverable afterwards.
pub async fn clear_data(
    admin: AuthAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    NoteRepo::clear(&state.store).await?;
    VideoRepo::clear(&state.store).await?;
    CourseRepo::clear(&state.store).await?;

    tracing::warn!(admin = %admin.email, "All uploaded data cleared");

    Ok(StatusCode::NO_CONTENT)
}
