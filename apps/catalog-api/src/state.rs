//! Shared application state passed to request handlers.

use mongodb::{Client, Database};

/// Cloned per handler; the client and database share a connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client
    pub mongo_client: Client,
    /// MongoDB database handle
    pub db: Database,
}
