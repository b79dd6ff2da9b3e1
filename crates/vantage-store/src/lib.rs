//! # vantage-store
//!
//! Persistent client state for Vantage: company lists, saved searches,
//! per-company notes and the enrichment cache.
//!
//! Each collection is one JSON document in a key/value [`Storage`] medium
//! (`company_lists`, `saved_searches`, `notes_{id}`, `enrichment_{id}`).
//! Reads never fail: absent or corrupt documents load as empty. Writes
//! surface their errors, in particular [`StoreError::Quota`].

pub mod error;
pub mod keys;
pub mod repos;
pub mod storage;
pub mod store;
pub mod view;

pub use error::StoreError;
pub use repos::AddOutcome;
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::StateStore;
pub use view::ListsView;
