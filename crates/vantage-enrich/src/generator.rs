//! The seam between the enrichment service and a generative model.

use std::future::Future;

use crate::error::EnrichError;

/// One generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Model identifier, e.g. `gemini-3-flash-preview`.
    pub model: String,
    pub prompt: String,
    /// Let the model fetch URLs mentioned in the prompt.
    pub url_context: bool,
    /// Requested MIME type of the answer.
    pub response_mime_type: Option<String>,
}

/// A model that turns a prompt into text.
///
/// Implementations must be thread-safe; the server shares one generator
/// across all requests.
pub trait ContentGenerator: Send + Sync {
    /// Run one generation and return the model's raw text. An empty answer
    /// is `Ok(String::new())`, not an error.
    fn generate(
        &self,
        request: &GenerateRequest,
    ) -> impl Future<Output = Result<String, EnrichError>> + Send;
}
