use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable: the pool is reference-counted internally and
/// the config is behind an `Arc`. Handlers hold no other state between
/// requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created once at startup.
    pub pool: diary_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
