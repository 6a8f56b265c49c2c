//! Application state.

use kasir_db::Database;

use crate::config::ServiceConfig;

/// Application state shared across handlers.
///
/// Cheap to clone: the database handle wraps a connection pool.
#[derive(Clone)]
pub struct AppState {
    /// The storage layer.
    pub db: Database,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(db: Database, config: ServiceConfig) -> Self {
        Self { db, config }
    }
}
