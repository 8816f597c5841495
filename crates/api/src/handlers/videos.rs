//! Handlers for the video lectures catalog.
//!
//! Same catalog semantics as notes: merged seed + uploaded listings with a
//! live filter, admin-gated uploads and idempotent deletes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use academy_core::catalog::{filter_catalog, merge_with_seed};
use academy_core::error::CoreError;
use academy_core::seed::seed_videos;
use academy_core::video::{CreateVideo, Video};
use academy_store::repositories::VideoRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::query::CatalogQuery;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /videos?q=&category=
///
/// List the merged videos catalog, filtered by search term and category.
pub async fn list_videos(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> AppResult<impl IntoResponse> {
    let uploaded = VideoRepo::load(&state.store).await?;
    let merged = merge_with_seed(uploaded, seed_videos());
    let videos = filter_catalog(merged, query.search(), query.category());

    Ok(Json(DataResponse { data: videos }))
}

/// GET /videos/{id}
///
/// Look up a single video in the merged catalog.
pub async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let uploaded = VideoRepo::load(&state.store).await?;
    let merged = merge_with_seed(uploaded, seed_videos());

    let video = merged
        .into_iter()
        .find(|v| v.id == id)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Video", id }))?;

    Ok(Json(DataResponse { data: video }))
}

/// POST /videos
///
/// Create a video from an upload form payload.
pub async fn create_video(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateVideo>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let video = VideoRepo::append(&state.store, Video::from_upload(input)).await?;

    tracing::info!(
        admin = %admin.email,
        video_id = %video.id,
        category = %video.category,
        instructor = %video.instructor,
        "Video uploaded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: video })))
}

/// DELETE /videos/{id}
///
/// Remove a video from the uploaded-videos document. Idempotent.
pub async fn delete_video(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let removed = VideoRepo::remove(&state.store, &id).await?;

    tracing::info!(admin = %admin.email, video_id = %id, removed, "Video delete requested");

    Ok(StatusCode::NO_CONTENT)
}
