//! Generative Language API (Gemini) client.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use vantage_config::GeminiConfig;

use crate::error::EnrichError;
use crate::generator::{ContentGenerator, GenerateRequest};
use crate::http::check_response;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Tool {
    url_context: UrlContext,
}

#[derive(Serialize)]
struct UrlContext {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate; empty without candidates.
    fn text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

fn request_body(request: &GenerateRequest) -> GenerateContentBody<'_> {
    GenerateContentBody {
        contents: vec![Content {
            role: "user",
            parts: vec![TextPart {
                text: &request.prompt,
            }],
        }],
        tools: if request.url_context {
            vec![Tool {
                url_context: UrlContext {},
            }]
        } else {
            Vec::new()
        },
        generation_config: request
            .response_mime_type
            .as_deref()
            .map(|mime| GenerationConfig {
                response_mime_type: mime,
            }),
    }
}

/// HTTP client for `models/{model}:generateContent`.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// # Errors
    ///
    /// Returns [`EnrichError::Http`] if the HTTP client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, EnrichError> {
        let mut builder = reqwest::Client::builder().user_agent("vantage/0.1");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from the `[gemini]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::MissingApiKey`] when no key is configured.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, EnrichError> {
        if !config.is_configured() {
            return Err(EnrichError::MissingApiKey);
        }
        Self::new(
            config.api_key.clone(),
            config.base_url.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{model}:generateContent", self.base_url)
    }
}

impl ContentGenerator for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, EnrichError> {
        let url = self.endpoint(&request.model);
        debug!(%url, url_context = request.url_context, "calling generateContent");

        let resp = check_response(
            self.http
                .post(&url)
                .header(API_KEY_HEADER, &self.api_key)
                .json(&request_body(request))
                .send()
                .await?,
        )
        .await?;

        let raw = resp.text().await?;
        let data: GenerateContentResponse = serde_json::from_str(&raw)
            .map_err(|e| EnrichError::Parse(format!("generateContent response: {e}")))?;
        Ok(data.text())
    }
}
