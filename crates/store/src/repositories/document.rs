//! Shared load/save plumbing for catalog documents.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StoreError, StoreResult};
use crate::file_store::FileStore;

/// Load a catalog document as a record list.
///
/// A missing document is an empty catalog. A document that exists but does
/// not parse is also treated as empty -- failing open keeps the seed records
/// usable -- with a warning so the corruption is visible in logs. I/O errors
/// propagate.
pub(crate) async fn load<T: DeserializeOwned>(
    store: &FileStore,
    key: &str,
) -> StoreResult<Vec<T>> {
    let Some(raw) = store.get(key).await? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(records) => Ok(records),
        Err(err) => {
            tracing::warn!(key, error = %err, "Malformed catalog document, treating as empty");
            Ok(Vec::new())
        }
    }
}

/// Serialize a record list and rewrite the document in full.
pub(crate) async fn save<T: Serialize>(
    store: &FileStore,
    key: &str,
    records: &[T],
) -> StoreResult<()> {
    let raw = serde_json::to_string(records).map_err(|source| StoreError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.put(key, &raw).await
}
