//! Company catalog location.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_catalog_path() -> String {
    ".vantage/companies.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// JSON array of companies, in catalog order.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl CatalogConfig {
    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }
}
