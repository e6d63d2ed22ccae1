use std::sync::Arc;

use folio_db::Stores;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the stores and config sit behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    /// Storage for every collection, backed by the configured backend.
    pub stores: Stores,
    pub config: Arc<ServerConfig>,
}
