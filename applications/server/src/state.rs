/// Shared application state
use sqlx::SqlitePool;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}
