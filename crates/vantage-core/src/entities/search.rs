use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::Stage;
use crate::errors::CoreError;
use crate::navigation::NavigationIntent;

const ALL: &str = "All";

/// Sector constraint of a discovery query. Serialized as `"All"` or the
/// sector name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectorFilter {
    #[default]
    All,
    Sector(String),
}

impl SectorFilter {
    #[must_use]
    pub fn matches(&self, sector: &str) -> bool {
        match self {
            Self::All => true,
            Self::Sector(wanted) => wanted == sector,
        }
    }
}

impl From<String> for SectorFilter {
    fn from(value: String) -> Self {
        if value.is_empty() || value == ALL {
            Self::All
        } else {
            Self::Sector(value)
        }
    }
}

impl From<SectorFilter> for String {
    fn from(value: SectorFilter) -> Self {
        match value {
            SectorFilter::All => ALL.to_string(),
            SectorFilter::Sector(name) => name,
        }
    }
}

impl fmt::Display for SectorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Sector(name) => f.write_str(name),
        }
    }
}

/// Stage constraint of a discovery query. Serialized as `"All"` or the stage
/// display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StageFilter {
    #[default]
    All,
    Only(Stage),
}

impl StageFilter {
    #[must_use]
    pub fn matches(self, stage: Stage) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == stage,
        }
    }
}

impl TryFrom<String> for StageFilter {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() || value == ALL {
            Ok(Self::All)
        } else {
            value.parse().map(Self::Only)
        }
    }
}

impl From<StageFilter> for String {
    fn from(value: StageFilter) -> Self {
        value.to_string()
    }
}

impl fmt::Display for StageFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL),
            Self::Only(stage) => f.write_str(stage.as_str()),
        }
    }
}

/// Explicit filter shape of a saved search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct SearchFilters {
    #[serde(default)]
    #[schemars(with = "String")]
    pub sector: SectorFilter,
    #[serde(default)]
    #[schemars(with = "String")]
    pub stage: StageFilter,
}

/// A persisted query + filter combination for quick re-execution.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filters: SearchFilters,
    pub created_at: DateTime<Utc>,
}

impl SavedSearch {
    /// Name given to a search saved without an explicit one, e.g.
    /// `Search: fintech (Fintech/Growth)`.
    #[must_use]
    pub fn default_name(query: &str, filters: &SearchFilters) -> String {
        let query = if query.is_empty() { ALL } else { query };
        format!("Search: {query} ({}/{})", filters.sector, filters.stage)
    }

    /// Re-apply this search to the discovery view.
    #[must_use]
    pub fn navigation_intent(&self) -> NavigationIntent {
        NavigationIntent::discovery(&self.query, &self.filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn filters_serialize_as_plain_strings() {
        let filters = SearchFilters {
            sector: SectorFilter::Sector("Fintech".into()),
            stage: StageFilter::Only(Stage::SeriesA),
        };
        let value = serde_json::to_value(&filters).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "sector": "Fintech", "stage": "Series A" })
        );
        let back: SearchFilters = serde_json::from_value(value).unwrap();
        assert_eq!(back, filters);
    }

    #[test]
    fn all_round_trips() {
        let value = serde_json::json!({ "sector": "All", "stage": "All" });
        let filters: SearchFilters = serde_json::from_value(value).unwrap();
        assert_eq!(filters, SearchFilters::default());
    }

    #[test]
    fn unknown_stage_is_rejected() {
        let value = serde_json::json!({ "sector": "All", "stage": "Pre-IPO" });
        assert!(serde_json::from_value::<SearchFilters>(value).is_err());
    }

    #[test]
    fn default_name_uses_all_for_empty_query() {
        let filters = SearchFilters {
            sector: SectorFilter::Sector("Fintech".into()),
            stage: StageFilter::All,
        };
        assert_eq!(
            SavedSearch::default_name("", &filters),
            "Search: All (Fintech/All)"
        );
        assert_eq!(
            SavedSearch::default_name("payments", &filters),
            "Search: payments (Fintech/All)"
        );
    }

    #[test]
    fn filters_match() {
        assert!(SectorFilter::All.matches("Database"));
        assert!(!SectorFilter::Sector("Fintech".into()).matches("Database"));
        assert!(StageFilter::Only(Stage::Growth).matches(Stage::Growth));
        assert!(!StageFilter::Only(Stage::Seed).matches(Stage::Growth));
    }
}
