//! Repository for the admin-created courses document.

use academy_core::course::Course;

use crate::error::StoreResult;
use crate::file_store::FileStore;
use crate::keys::COURSES_KEY;

use super::document;

/// Provides load/save/append/remove over admin-created courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Load all admin-created courses. Malformed documents fail open to empty.
    pub async fn load(store: &FileStore) -> StoreResult<Vec<Course>> {
        document::load(store, COURSES_KEY).await
    }

    /// Rewrite the courses document in full.
    pub async fn save(store: &FileStore, courses: &[Course]) -> StoreResult<()> {
        document::save(store, COURSES_KEY, courses).await
    }

    /// Append a newly created course and persist.
    pub async fn append(store: &FileStore, course: Course) -> StoreResult<Course> {
        let mut courses = Self::load(store).await?;
        courses.push(course.clone());
        Self::save(store, &courses).await?;
        Ok(course)
    }

    /// Remove the course with the given id, if present.
    ///
    /// Returns whether a course was actually removed.
    pub async fn remove(store: &FileStore, id: &str) -> StoreResult<bool> {
        let courses = Self::load(store).await?;
        let before = courses.len();

        let remaining: Vec<Course> = courses.into_iter().filter(|c| c.id != id).collect();
        if remaining.len() == before {
            return Ok(false);
        }

        Self::save(store, &remaining).await?;
        Ok(true)
    }

    /// Delete the whole courses document.
    pub async fn clear(store: &FileStore) -> StoreResult<()> {
        store.remove(COURSES_KEY).await
    }

    /// Number of admin-created courses, for the admin diagnostics endpoint.
    pub async fn count(store: &FileStore) -> StoreResult<usize> {
        Ok(Self::load(store).await?.len())
    }
}
