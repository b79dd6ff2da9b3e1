use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A user-curated, named collection of company references.
///
/// `company_ids` keeps insertion order and never holds duplicates. The ids
/// are not checked against the catalog; dangling references are tolerated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub company_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl CompanyList {
    #[must_use]
    pub fn contains(&self, company_id: &str) -> bool {
        self.company_ids.iter().any(|id| id == company_id)
    }

    /// Append the ids not already present, in input order. Returns how many
    /// were added.
    pub fn add_companies<I, S>(&mut self, company_ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.company_ids.len();
        for id in company_ids {
            let id = id.as_ref();
            if !self.contains(id) {
                self.company_ids.push(id.to_string());
            }
        }
        self.company_ids.len() - before
    }

    /// Drop `company_id` from the list. Returns whether anything was removed.
    pub fn remove_company(&mut self, company_id: &str) -> bool {
        let before = self.company_ids.len();
        self.company_ids.retain(|id| id != company_id);
        self.company_ids.len() != before
    }
}
