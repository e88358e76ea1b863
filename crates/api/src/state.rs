use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable; the pool is internally
/// reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, constructed in `main` and injected
    /// here rather than held in module-scope global state.
    pub pool: wayfarer_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
