use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Structured profile derived from a company's website by the generative model.
///
/// The four model-produced fields are optional: a degraded upstream answer
/// leaves them absent, and absent fields are omitted from the JSON form.
/// `sources` is always attached by the enrichment service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub what_they_do: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_signals: Option<Vec<String>>,
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl EnrichmentRecord {
    /// True when none of the model-produced fields survived parsing.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        self.summary.is_none()
            && self.what_they_do.is_none()
            && self.keywords.is_none()
            && self.derived_signals.is_none()
    }

    /// Timestamp of the most recent source, if any.
    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.sources.iter().map(|s| s.timestamp).max()
    }
}

/// Where an enrichment came from and when it was fetched.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Source {
    pub url: String,
    pub timestamp: DateTime<Utc>,
}
