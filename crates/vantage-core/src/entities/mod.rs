//! Entity structs for all Vantage domain objects.
//!
//! Field names serialize as camelCase: these are the exact document shapes
//! persisted by the state store and returned by the enrichment endpoint.

mod company;
mod enrichment;
mod list;
mod search;

pub use company::{Company, Signal};
pub use enrichment::{EnrichmentRecord, Source};
pub use list::CompanyList;
pub use search::{SavedSearch, SearchFilters, SectorFilter, StageFilter};
