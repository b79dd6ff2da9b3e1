//! State store error types.

use thiserror::Error;
use vantage_core::errors::CoreError;

/// Errors from reading or writing persisted client state.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The write would push the store past its byte quota. Nothing was written.
    #[error("Storage quota exceeded writing '{key}': {needed} bytes needed, limit is {limit}")]
    Quota { key: String, needed: u64, limit: u64 },

    /// Underlying filesystem error.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A document could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Named list does not exist.
    #[error("List not found: {0}")]
    ListNotFound(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
