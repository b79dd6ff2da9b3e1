//! Cross-cutting error types for Vantage.
//!
//! Domain-specific errors (e.g., `StoreError`, `EnrichError`) are defined in
//! their respective crates. The `vantage` binary converges them through
//! `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Vantage crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints, unknown enum value).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a [`CoreError::NotFound`] on the given entity kind.
    #[must_use]
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        Self::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}
