//! Environment-driven configuration.
//!
//! Reads `DATABASE_URL` (and an optional connection cap) from the process
//! environment, loading a `.env` file first when one is present.

use std::env;

use crate::error::{StoreError, StoreResult};

/// Default maximum connections for the pool.
/// Kept low for single-service workloads.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl StoreConfig {
    /// Load config from the environment.
    ///
    /// Fails hard with an actionable error if `DATABASE_URL` is unset.
    pub fn from_env() -> StoreResult<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").map_err(|_| {
            StoreError::config("DATABASE_URL not set\n\nExport it or add it to .env")
        })?;

        let max_connections = env::var("SHOPLIST_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        tracing::debug!(max_connections, "loaded store config");

        Ok(Self {
            database_url,
            max_connections,
        })
    }
}
