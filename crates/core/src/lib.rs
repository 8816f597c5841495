//! Pure domain logic for the academy back-office.
//!
//! No I/O lives here: content record models, the catalog merge/filter rules,
//! upload validation, and the shipped seed data. The store and API crates
//! build on these types.

pub mod catalog;
pub mod category;
pub mod course;
pub mod error;
pub mod note;
pub mod seed;
pub mod types;
pub mod validation;
pub mod video;
