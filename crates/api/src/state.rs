use std::sync::Arc;

use academy_store::FileStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The catalog document store.
    pub store: Arc<FileStore>,
    /// Server configuration (admin credential, JWT secret, timeouts).
    pub config: Arc<ServerConfig>,
}
