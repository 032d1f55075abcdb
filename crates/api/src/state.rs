use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone. Handlers only ever read through the pool; there is no
/// other shared mutable state between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: filmcat_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
