//! Typed repositories over the document store.
//!
//! Each repository owns one document key and exposes `load`, `save`,
//! `append`, `remove`, and `clear`. Loading a malformed document fails open
//! to an empty catalog (the shipped seed records still render); I/O errors
//! propagate to the caller.

mod document;

pub mod course_repo;
pub mod note_repo;
pub mod video_repo;

pub use course_repo::CourseRepo;
pub use note_repo::NoteRepo;
pub use video_repo::VideoRepo;
