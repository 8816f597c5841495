//! File-backed key-value document store.
//!
//! Each key maps to one `<key>.json` file under the store's root directory.
//! Writes replace the whole file; there is no locking, so the store assumes a
//! single writing process (single-admin deployment).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};

/// Key-value document store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            key: root.display().to_string(),
            source,
        })?;
        Ok(FileStore { root })
    }

    /// The directory this store reads and writes under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    /// Read the raw document for `key`. A missing document is `Ok(None)`.
    pub async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    /// Replace the document for `key` in full.
    pub async fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        tokio::fs::write(self.path_for(key), value)
            .await
            .map_err(|source| StoreError::Io {
                key: key.to_string(),
                source,
            })
    }

    /// Delete the document for `key`. Deleting a missing document is a no-op.
    pub async fn remove(&self, key: &str) -> StoreResult<()> {
        match tokio::fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    /// Probe that the store is readable and writable.
    ///
    /// Writes and removes a throwaway document, the same check the admin
    /// diagnostics page performs.
    pub async fn health_check(&self) -> StoreResult<()> {
        const PROBE_KEY: &str = ".probe";
        self.put(PROBE_KEY, "ok").await?;
        self.remove(PROBE_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> (FileStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::open(dir.path()).expect("open store");
        (store, dir)
    }

    #[tokio::test]
    async fn missing_document_reads_as_none() {
        let (store, _dir) = store();
        let raw = store.get("uploadedNotes").await.unwrap();
        assert!(raw.is_none());
    }

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let (store, _dir) = store();
        store.put("uploadedNotes", r#"[{"id":"9"}]"#).await.unwrap();

        let raw = store.get("uploadedNotes").await.unwrap();
        assert_eq!(raw.as_deref(), Some(r#"[{"id":"9"}]"#));
    }

    #[tokio::test]
    async fn put_replaces_the_whole_document() {
        let (store, _dir) = store();
        store.put("k", "first").await.unwrap();
        store.put("k", "second").await.unwrap();

        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn remove_missing_document_is_noop() {
        let (store, _dir) = store();
        assert!(store.remove("uploadedVideos").await.is_ok());
    }

    #[tokio::test]
    async fn remove_deletes_the_document() {
        let (store, _dir) = store();
        store.put("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        assert!(store.get("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn health_check_passes_on_writable_dir() {
        let (store, _dir) = store();
        assert!(store.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn open_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("academy");
        let store = FileStore::open(&nested).unwrap();
        assert!(store.root().is_dir());
    }
}
