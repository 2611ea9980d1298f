//! Schema setup for the `shopping_list` table.
//!
//! One idempotent statement, safe to re-run on startup. The column
//! defaults (`checked`, `date_added`) live here so inserts can omit
//! those fields and storage fills them in.

use sqlx::PgPool;

use crate::error::StoreResult;

/// Create the `shopping_list` table if it does not exist.
pub async fn ensure(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("ensuring shopping_list schema");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shopping_list (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            price TEXT NOT NULL,
            date_added TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            checked BOOLEAN NOT NULL DEFAULT FALSE,
            category TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
