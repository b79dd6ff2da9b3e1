//! Export a company list as JSON or CSV.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::entities::{Company, CompanyList};
use crate::errors::CoreError;

const CSV_HEADERS: [&str; 6] = ["Name", "Website", "Sector", "Stage", "Location", "Funding"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A rendered export, ready to be written to `file_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListExport {
    pub file_name: String,
    pub content_type: String,
    pub content: String,
}

/// Render the companies of `list` that exist in `catalog`.
///
/// # Errors
///
/// Returns [`CoreError::Other`] if JSON serialization fails.
pub fn export_list(
    list: &CompanyList,
    catalog: &Catalog,
    format: ExportFormat,
) -> Result<ListExport, CoreError> {
    let companies = catalog.resolve(&list.company_ids);
    let content = match format {
        ExportFormat::Json => {
            serde_json::to_string_pretty(&companies).map_err(|e| CoreError::Other(e.into()))?
        }
        ExportFormat::Csv => render_csv(&companies),
    };
    Ok(ListExport {
        file_name: export_file_name(&list.name, format),
        content_type: format.content_type().to_string(),
        content,
    })
}

/// `Seed Bets` → `seed_bets_export.csv`. Anything other than alphanumerics,
/// `-` and `_` becomes `_`, so the name never leaves the target directory.
#[must_use]
pub fn export_file_name(list_name: &str, format: ExportFormat) -> String {
    let stem: String = list_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}_export.{}", format.extension())
}

fn render_csv(companies: &[&Company]) -> String {
    let mut lines = Vec::with_capacity(companies.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    for company in companies {
        let row = [
            company.name.as_str(),
            company.website.as_str(),
            company.sector.as_str(),
            company.stage.as_str(),
            company.location.as_str(),
            company.total_funding.as_str(),
        ];
        lines.push(row.map(csv_field).join(","));
    }
    lines.join("\n")
}

/// RFC 4180 quoting: wrap in quotes when the value holds a comma, quote or
/// line break; double embedded quotes.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
