//! Enrichment error types.

use thiserror::Error;

/// Errors from enriching a company profile.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// The request was rejected before any upstream call.
    #[error("{0}")]
    Validation(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned upstream.
        status: u16,
        /// Error message extracted from the body, or the raw body.
        message: String,
    },

    /// Upstream returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The response envelope could not be read.
    #[error("parse error: {0}")]
    Parse(String),

    /// No API key configured for the generative model.
    #[error("no Gemini API key configured (set GEMINI_API_KEY or gemini.api_key)")]
    MissingApiKey,
}

impl EnrichError {
    /// HTTP status this error maps to at the request boundary: validation
    /// failures are the caller's fault, everything else is upstream.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            _ => 500,
        }
    }
}
