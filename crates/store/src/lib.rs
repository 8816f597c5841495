//! Durable layer for the academy back-office.
//!
//! The only durable state in this system is a handful of key-value documents:
//! one JSON array of uploaded records per content type, rewritten in full on
//! every change. [`FileStore`] provides the raw key-value access; the
//! repositories in [`repositories`] wrap it so call sites never touch keys or
//! raw JSON directly.

pub mod error;
pub mod file_store;
pub mod keys;
pub mod repositories;

pub use error::{StoreError, StoreResult};
pub use file_store::FileStore;
