/// Errors from the durable document store.
///
/// Load and save failures are explicit results rather than being swallowed;
/// the API layer decides how to surface them.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on document '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize document '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias for store operation results.
pub type StoreResult<T> = Result<T, StoreError>;
