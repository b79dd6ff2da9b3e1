//! Navigation intents for the discovery view.
//!
//! Running a saved search does not execute anything by itself: it produces
//! the discovery route plus `q` / `sector` / `stage` parameters, exactly what
//! the view reads back on load.

use std::fmt;

use serde::Serialize;

use crate::catalog::CompanyQuery;
use crate::entities::{SearchFilters, SectorFilter, StageFilter};
use crate::errors::CoreError;

pub const DISCOVERY_PATH: &str = "/companies";

const PARAM_QUERY: &str = "q";
const PARAM_SECTOR: &str = "sector";
const PARAM_STAGE: &str = "stage";

/// A route plus ordered query parameters (unencoded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationIntent {
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl NavigationIntent {
    /// Discovery route for a query and its filters.
    #[must_use]
    pub fn discovery(query: &str, filters: &SearchFilters) -> Self {
        Self {
            path: DISCOVERY_PATH.to_string(),
            params: vec![
                (PARAM_QUERY.to_string(), query.to_string()),
                (PARAM_SECTOR.to_string(), filters.sector.to_string()),
                (PARAM_STAGE.to_string(), filters.stage.to_string()),
            ],
        }
    }

    /// Percent-encoded `k=v&k=v` form.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Path with the query string appended.
    #[must_use]
    pub fn to_url(&self) -> String {
        if self.params.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_string())
        }
    }
}

impl fmt::Display for NavigationIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

/// Rebuild a discovery query from a query string (with or without a leading
/// `?`). Missing parameters fall back to an empty query and `All` filters;
/// unknown parameters are ignored. Sorting is not part of the URL and stays
/// at its default.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] for malformed percent-encoding or an
/// unknown stage.
pub fn parse_discovery_query(query_string: &str) -> Result<CompanyQuery, CoreError> {
    let mut query = CompanyQuery::default();
    let trimmed = query_string.trim_start_matches('?');

    for pair in trimmed.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let value = decode_component(value)?;
        match key {
            PARAM_QUERY => query.query = value,
            PARAM_SECTOR => query.filters.sector = SectorFilter::from(value),
            PARAM_STAGE => query.filters.stage = StageFilter::try_from(value)?,
            _ => {}
        }
    }
    Ok(query)
}

fn decode_component(raw: &str) -> Result<String, CoreError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| CoreError::Validation(format!("malformed query parameter '{raw}': {e}")))
}
