//! The enrichment operation.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use vantage_core::entities::{EnrichmentRecord, Source};

use crate::error::EnrichError;
use crate::generator::{ContentGenerator, GenerateRequest};
use crate::parse::parse_model_output;
use crate::prompt::{JSON_MIME_TYPE, build_prompt};

pub const URL_REQUIRED: &str = "URL is required";

/// Body of `POST /api/enrich`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
}

/// Produces [`EnrichmentRecord`]s from a company website through a
/// [`ContentGenerator`]. Single attempt, no caching, no retries.
#[derive(Debug, Clone)]
pub struct Enricher<G> {
    generator: G,
    model: String,
}

impl<G: ContentGenerator> Enricher<G> {
    pub fn new(generator: G, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }

    pub const fn generator(&self) -> &G {
        &self.generator
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Enrich the company at `url`.
    ///
    /// The model-produced fields are parsed leniently; an unusable answer
    /// yields a record carrying only `sources`.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::Validation`] for a blank `url` (the generator
    /// is not called), or the generator's error.
    pub async fn enrich(
        &self,
        url: &str,
        company_name: &str,
    ) -> Result<EnrichmentRecord, EnrichError> {
        if url.trim().is_empty() {
            return Err(EnrichError::Validation(URL_REQUIRED.to_string()));
        }

        info!(url, company = company_name, model = %self.model, "enriching company");
        let request = GenerateRequest {
            model: self.model.clone(),
            prompt: build_prompt(company_name, url),
            url_context: true,
            response_mime_type: Some(JSON_MIME_TYPE.to_string()),
        };

        let text = self.generator.generate(&request).await.inspect_err(|e| {
            warn!(url, error = %e, "enrichment failed");
        })?;

        let mut record = parse_model_output(&text);
        record.sources = vec![Source {
            url: url.to_string(),
            timestamp: Utc::now(),
        }];
        info!(url, degraded = record.is_degraded(), "enrichment complete");
        Ok(record)
    }

    /// [`Self::enrich`] over a request body with optional fields.
    ///
    /// # Errors
    ///
    /// Same as [`Self::enrich`]; a missing `url` is a validation error.
    pub async fn enrich_request(
        &self,
        request: &EnrichRequest,
    ) -> Result<EnrichmentRecord, EnrichError> {
        self.enrich(
            request.url.as_deref().unwrap_or_default(),
            request.company_name.as_deref().unwrap_or_default(),
        )
        .await
    }
}
