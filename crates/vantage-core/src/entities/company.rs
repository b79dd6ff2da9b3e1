use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{SignalType, Stage};

/// A company from the catalog. Read-only for every Vantage operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub website: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub description: String,
    pub sector: String,
    pub stage: Stage,
    #[serde(default)]
    pub location: String,
    pub founded_year: i32,
    /// Display string such as `"$52M"` or `"$1.7B"`.
    pub total_funding: String,
    pub last_funding_date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub signals: Vec<Signal>,
}

/// A dated market event owned by a [`Company`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Signal {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SignalType,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}
