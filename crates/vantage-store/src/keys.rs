//! Storage key layout. One document per key.

pub const COMPANY_LISTS: &str = "company_lists";
pub const SAVED_SEARCHES: &str = "saved_searches";

const NOTES_PREFIX: &str = "notes_";
const ENRICHMENT_PREFIX: &str = "enrichment_";

/// `notes_{companyId}`
#[must_use]
pub fn notes(company_id: &str) -> String {
    format!("{NOTES_PREFIX}{company_id}")
}

/// `enrichment_{companyId}`
#[must_use]
pub fn enrichment(company_id: &str) -> String {
    format!("{ENRICHMENT_PREFIX}{company_id}")
}
