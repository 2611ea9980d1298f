//! Error types for shoplist-store

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Storage-layer failure (connectivity, constraint violation).
    /// Carries the underlying error unchanged.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("configuration error: {reason}")]
    Config { reason: String },
}

impl StoreError {
    /// Create a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
