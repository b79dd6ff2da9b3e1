//! Funding stages, signal kinds, and sort keys.
//!
//! `Stage` serializes with its display name (`"Series A"`) because that is the
//! form stored in catalog files and saved-search filters. The remaining enums
//! use `snake_case`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// Funding stage of a company, ordered by lifecycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Stage {
    Seed,
    #[serde(rename = "Series A", alias = "SeriesA")]
    SeriesA,
    #[serde(rename = "Series B", alias = "SeriesB")]
    SeriesB,
    #[serde(rename = "Series C", alias = "SeriesC")]
    SeriesC,
    Growth,
}

impl Stage {
    pub const ALL: [Self; 5] = [
        Self::Seed,
        Self::SeriesA,
        Self::SeriesB,
        Self::SeriesC,
        Self::Growth,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seed => "Seed",
            Self::SeriesA => "Series A",
            Self::SeriesB => "Series B",
            Self::SeriesC => "Series C",
            Self::Growth => "Growth",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = CoreError;

    /// Accepts the display name and loose spellings: `series-a`, `series_a`,
    /// `SeriesA`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match folded.as_str() {
            "seed" => Ok(Self::Seed),
            "seriesa" => Ok(Self::SeriesA),
            "seriesb" => Ok(Self::SeriesB),
            "seriesc" => Ok(Self::SeriesC),
            "growth" => Ok(Self::Growth),
            _ => Err(CoreError::Validation(format!("unknown stage '{s}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// SignalType
// ---------------------------------------------------------------------------

/// Kind of market event attached to a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SignalType {
    Funding,
    Hiring,
    Product,
    News,
}

impl SignalType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Funding => "funding",
            Self::Hiring => "hiring",
            Self::Product => "product",
            Self::News => "news",
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SortField / SortOrder
// ---------------------------------------------------------------------------

/// Company attribute the discovery view can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Name,
    Sector,
    Stage,
    Location,
    FoundedYear,
    TotalFunding,
    LastFundingDate,
}

impl SortField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Sector => "sector",
            Self::Stage => "stage",
            Self::Location => "location",
            Self::FoundedYear => "founded_year",
            Self::TotalFunding => "total_funding",
            Self::LastFundingDate => "last_funding_date",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
