//! Client for a running Vantage server's `/api/enrich` endpoint.

use std::time::Duration;

use tracing::debug;

use vantage_core::entities::EnrichmentRecord;

use crate::error::EnrichError;
use crate::http::check_response;
use crate::service::EnrichRequest;

#[derive(Debug, Clone)]
pub struct RemoteEnricher {
    http: reqwest::Client,
    base_url: String,
}

impl RemoteEnricher {
    /// `base_url` is the server root, e.g. `http://localhost:3000`.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, EnrichError> {
        let mut builder = reqwest::Client::builder().user_agent("vantage/0.1");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// # Errors
    ///
    /// Returns [`EnrichError::Api`] carrying the server's `{error}` message
    /// for non-success responses, [`EnrichError::Http`] for transport or
    /// decoding failures.
    pub async fn enrich(
        &self,
        url: &str,
        company_name: &str,
    ) -> Result<EnrichmentRecord, EnrichError> {
        let endpoint = format!("{}/api/enrich", self.base_url);
        debug!(%endpoint, url, "requesting remote enrichment");

        let body = EnrichRequest {
            url: Some(url.to_string()),
            company_name: Some(company_name.to_string()),
        };
        let resp = check_response(self.http.post(&endpoint).json(&body).send().await?).await?;
        Ok(resp.json().await?)
    }
}
