//! Repository for the uploaded-notes document.

use academy_core::note::Note;

use crate::error::StoreResult;
use crate::file_store::FileStore;
use crate::keys::NOTES_KEY;

use super::document;

/// Provides load/save/append/remove over the uploaded notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Load all uploaded notes. Malformed documents fail open to empty.
    pub async fn load(store: &FileStore) -> StoreResult<Vec<Note>> {
        document::load(store, NOTES_KEY).await
    }

    /// Rewrite the uploaded-notes document in full.
    pub async fn save(store: &FileStore, notes: &[Note]) -> StoreResult<()> {
        document::save(store, NOTES_KEY, notes).await
    }

    /// Append a newly uploaded note and persist.
    pub async fn append(store: &FileStore, note: Note) -> StoreResult<Note> {
        let mut notes = Self::load(store).await?;
        notes.push(note.clone());
        Self::save(store, &notes).await?;
        Ok(note)
    }

    /// Remove the note with the given id, if present.
    ///
    /// Returns whether a note was actually removed. Removing an absent id
    /// does not rewrite the document.
    pub async fn remove(store: &FileStore, id: &str) -> StoreResult<bool> {
        let notes = Self::load(store).await?;
        let before = notes.len();

        let remaining: Vec<Note> = notes.into_iter().filter(|n| n.id != id).collect();
        if remaining.len() == before {
            return Ok(false);
        }

        Self::save(store, &remaining).await?;
        Ok(true)
    }

    /// Delete the whole uploaded-notes document.
    pub async fn clear(store: &FileStore) -> StoreResult<()> {
        store.remove(NOTES_KEY).await
    }

    /// Number of uploaded notes, for the admin diagnostics endpoint.
    pub async fn count(store: &FileStore) -> StoreResult<usize> {
        Ok(Self::load(store).await?.len())
    }
}
