//! Store error types

use thiserror::Error;

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(#[from] std::io::Error),

    #[error("malformed persisted record: {0}")]
    Malformed(#[from] serde_json::Error),
}
