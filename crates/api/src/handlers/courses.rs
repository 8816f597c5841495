//! Handlers for the courses catalog.
//!
//! Courses share the merge semantics of notes and videos but their category
//! labels are free-form marketing copy, so the list endpoint only offers the
//! text search.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use academy_core::catalog::{filter_catalog, merge_with_seed};
use academy_core::category::CATEGORY_ALL;
use academy_core::course::{Course, CreateCourse};
use academy_core::error::CoreError;
use academy_core::seed::seed_courses;
use academy_store::repositories::CourseRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// `?q=` search on the course listing.
#[derive(Debug, Default, serde::Deserialize)]
pub struct CourseQuery {
    pub q: Option<String>,
}

/// GET /courses?q=
///
/// List the merged courses catalog, filtered by search term.
pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<CourseQuery>,
) -> AppResult<impl IntoResponse> {
    let created = CourseRepo::load(&state.store).await?;
    let merged = merge_with_seed(created, seed_courses());
    let courses = filter_catalog(merged, query.q.as_deref().unwrap_or(""), CATEGORY_ALL);

    Ok(Json(DataResponse { data: courses }))
}

/// GET /courses/{id}
///
/// Look up a single course in the merged catalog.
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let created = CourseRepo::load(&state.store).await?;
    let merged = merge_with_seed(created, seed_courses());

    let course = merged
        .into_iter()
        .find(|c| c.id == id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;

    Ok(Json(DataResponse { data: course }))
}

/// POST /courses
///
/// Create a course from the course form payload.
pub async fn create_course(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCourse>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let course = CourseRepo::append(&state.store, Course::from_form(input)).await?;

    tracing::info!(
        admin = %admin.email,
        course_id = %course.id,
        title = %course.title,
        "Course created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: course })))
}

/// DELETE /courses/{id}
///
/// Remove a course from the courses document. Idempotent.
pub async fn delete_course(
    admin: AuthAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let removed = CourseRepo::remove(&state.store, &id).await?;

    tracing::info!(admin = %admin.email, course_id = %id, removed, "Course delete requested");

    Ok(StatusCode::NO_CONTENT)
}
