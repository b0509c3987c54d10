//! Application state management

use database::postgres::DatabaseConnection;

/// Shared application state.
///
/// Cloned per handler; the connection pool is reference-counted, so
/// clones are cheap and every handler shares the same pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: DatabaseConnection,
}
