//! Company catalog and discovery queries.
//!
//! The catalog is an immutable, ordered collection of [`Company`] records.
//! [`CompanyQuery`] filters it by free text, sector and stage, then sorts by a
//! [`SortSpec`]; [`paginate`] slices the result into fixed-size pages.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::entities::{Company, SearchFilters};
use crate::enums::{SortField, SortOrder};
use crate::errors::CoreError;

/// Page size used when the configuration does not override it.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Hits returned by [`Catalog::quick_search`] unless the caller asks otherwise.
pub const QUICK_SEARCH_LIMIT: usize = 5;

const QUICK_SEARCH_MIN_CHARS: usize = 2;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    companies: Vec<Company>,
}

impl Catalog {
    #[must_use]
    pub const fn new(companies: Vec<Company>) -> Self {
        Self { companies }
    }

    /// Parse a catalog from a JSON array of companies.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the document is not a valid
    /// company array.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json)
            .map(Self::new)
            .map_err(|e| CoreError::Validation(format!("invalid catalog document: {e}")))
    }

    #[must_use]
    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    /// Distinct sectors, in first-seen order.
    #[must_use]
    pub fn sectors(&self) -> Vec<&str> {
        let mut sectors: Vec<&str> = Vec::new();
        for company in &self.companies {
            if !sectors.contains(&company.sector.as_str()) {
                sectors.push(&company.sector);
            }
        }
        sectors
    }

    /// Companies whose id appears in `ids`, in catalog order. Unknown ids are
    /// skipped.
    #[must_use]
    pub fn resolve(&self, ids: &[String]) -> Vec<&Company> {
        self.companies
            .iter()
            .filter(|c| ids.iter().any(|id| *id == c.id))
            .collect()
    }

    #[must_use]
    pub fn query(&self, query: &CompanyQuery) -> Vec<&Company> {
        query.apply(&self.companies)
    }

    /// Type-ahead lookup: case-insensitive substring over name or sector, in
    /// catalog order, at most `limit` hits. Terms of one character or less
    /// match nothing.
    #[must_use]
    pub fn quick_search(&self, term: &str, limit: usize) -> Vec<&Company> {
        if term.chars().count() < QUICK_SEARCH_MIN_CHARS {
            return Vec::new();
        }
        let needle = term.to_lowercase();
        self.companies
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.sector.to_lowercase().contains(&needle)
            })
            .take(limit)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    #[must_use]
    pub const fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Column-header click: the same field flips the order, a new field starts
    /// ascending.
    #[must_use]
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.order.flipped())
        } else {
            Self::new(field, SortOrder::Asc)
        }
    }

    #[must_use]
    pub fn compare(self, a: &Company, b: &Company) -> Ordering {
        let ordering = match self.field {
            SortField::Name => compare_text(&a.name, &b.name),
            SortField::Sector => compare_text(&a.sector, &b.sector),
            SortField::Stage => a.stage.cmp(&b.stage),
            SortField::Location => compare_text(&a.location, &b.location),
            SortField::FoundedYear => a.founded_year.cmp(&b.founded_year),
            SortField::TotalFunding => compare_amounts(
                parse_funding_amount(&a.total_funding),
                parse_funding_amount(&b.total_funding),
            ),
            SortField::LastFundingDate => a.last_funding_date.cmp(&b.last_funding_date),
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Unparseable amounts sort before every parsed one.
fn compare_amounts(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (a, b) => a.is_some().cmp(&b.is_some()),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Parse a funding display string (`"$52M"`, `"$1.7B"`, `"$850K"`) into dollars.
/// Non-finite values (`NaN`, `inf`) count as unparseable.
#[must_use]
pub fn parse_funding_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();
    let (number, multiplier) = match cleaned.chars().last()?.to_ascii_uppercase() {
        'K' => (&cleaned[..cleaned.len() - 1], 1e3),
        'M' => (&cleaned[..cleaned.len() - 1], 1e6),
        'B' => (&cleaned[..cleaned.len() - 1], 1e9),
        'T' => (&cleaned[..cleaned.len() - 1], 1e12),
        _ => (cleaned.as_str(), 1.0),
    };
    number
        .parse::<f64>()
        .ok()
        .map(|n| n * multiplier)
        .filter(|n| n.is_finite())
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Free-text + filter + sort query over the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompanyQuery {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub filters: SearchFilters,
    #[serde(default)]
    pub sort: SortSpec,
}

impl CompanyQuery {
    /// Case-insensitive substring match on name or description, plus the
    /// sector and stage filters.
    #[must_use]
    pub fn matches(&self, company: &Company) -> bool {
        let needle = self.query.to_lowercase();
        let text_match = needle.is_empty()
            || company.name.to_lowercase().contains(&needle)
            || company.description.to_lowercase().contains(&needle);
        text_match
            && self.filters.sector.matches(&company.sector)
            && self.filters.stage.matches(company.stage)
    }

    /// Filter then stable-sort.
    #[must_use]
    pub fn apply<'a>(&self, companies: &'a [Company]) -> Vec<&'a Company> {
        let mut matched: Vec<&Company> = companies.iter().filter(|c| self.matches(c)).collect();
        matched.sort_by(|a, b| self.sort.compare(a, b));
        matched
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

/// Slice `items` into the 1-based `page`. Page 0 is treated as page 1; a page
/// past the end yields no items.
#[must_use]
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size);
    let items = items.into_iter().skip(start).take(page_size).collect();
    Page {
        items,
        page,
        page_size,
        total_items,
        total_pages,
    }
}
