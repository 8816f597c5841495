//! Document keys, one per content type.
//!
//! The key names are part of the persisted data format and must not change
//! without a migration.

/// Uploaded study notes.
pub const NOTES_KEY: &str = "uploadedNotes";

/// Uploaded video lectures.
pub const VIDEOS_KEY: &str = "uploadedVideos";

/// Admin-created courses.
pub const COURSES_KEY: &str = "uploadedCourses";

/// Every document key, in the order the clear-all operation visits them.
pub const ALL_KEYS: &[&str] = &[NOTES_KEY, VIDEOS_KEY, COURSES_KEY];
