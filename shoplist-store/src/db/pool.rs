//! Connection pool bootstrap.
//!
//! sqlx's `PgPool` owns pooling, timeouts and cancellation; this module
//! only applies the configured connection cap.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::StoreConfig;

/// Create a PostgreSQL connection pool from a loaded configuration.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn connect(config: &StoreConfig) -> Result<PgPool, sqlx::Error> {
    connect_with(&config.database_url, config.max_connections).await
}

/// Create a PostgreSQL connection pool with an explicit connection cap.
pub async fn connect_with(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(max_connections, "connecting to postgres");

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p shoplist-store -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let config = StoreConfig {
            database_url: url,
            max_connections: 2,
        };
        let pool = connect(&config).await.expect("pool creation failed");

        let result: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");

        assert_eq!(result.0, 1);
    }
}
