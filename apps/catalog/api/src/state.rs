//! Application state management.
//!
//! The shared application state passed to all request handlers.

/// Shared application state.
///
/// Cloned for each handler (inexpensive pool/client clones), providing access to:
/// - Application configuration
/// - PostgreSQL connection pool
/// - The long-lived S3 client (cheap to clone, shares the underlying transport)
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL database connection pool
    pub db: database::postgres::DatabaseConnection,
    /// Object store client, built once at startup
    pub s3: storage::s3::Client,
}
