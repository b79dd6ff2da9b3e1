//! Saved search repository.

use chrono::Utc;
use tracing::info;

use vantage_core::entities::{SavedSearch, SearchFilters};
use vantage_core::ids::{PREFIX_SEARCH, generate_unique_id};
use vantage_core::navigation::NavigationIntent;

use crate::error::StoreError;
use crate::keys;
use crate::storage::Storage;
use crate::store::StateStore;

impl<S: Storage> StateStore<S> {
    pub fn saved_searches(&self) -> Vec<SavedSearch> {
        self.load(keys::SAVED_SEARCHES)
    }

    pub fn saved_search(&self, search_id: &str) -> Option<SavedSearch> {
        self.saved_searches().into_iter().find(|s| s.id == search_id)
    }

    /// Append a saved search. Without a (non-blank) name the search is
    /// named after its query and filters.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if id generation or the write fails.
    pub fn save_search(
        &mut self,
        name: Option<&str>,
        query: &str,
        filters: SearchFilters,
    ) -> Result<SavedSearch, StoreError> {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map_or_else(|| SavedSearch::default_name(query, &filters), String::from);

        let mut searches = self.saved_searches();
        let search = SavedSearch {
            id: generate_unique_id(PREFIX_SEARCH, |id| searches.iter().any(|s| s.id == id))?,
            name,
            query: query.to_string(),
            filters,
            created_at: Utc::now(),
        };
        searches.push(search.clone());
        self.save(keys::SAVED_SEARCHES, &searches)?;
        info!(search_id = %search.id, name = %search.name, "saved search");
        Ok(search)
    }

    /// Delete a saved search. Idempotent; returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns the write error.
    pub fn delete_search(&mut self, search_id: &str) -> Result<bool, StoreError> {
        let mut searches = self.saved_searches();
        let before = searches.len();
        searches.retain(|s| s.id != search_id);
        if searches.len() == before {
            return Ok(false);
        }
        self.save(keys::SAVED_SEARCHES, &searches)?;
        Ok(true)
    }

    /// The discovery route that re-applies `search`. Pure; nothing is read
    /// or written.
    #[must_use]
    pub fn run_search(&self, search: &SavedSearch) -> NavigationIntent {
        search.navigation_intent()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use vantage_core::entities::{SearchFilters, SectorFilter, StageFilter};
    use vantage_core::enums::Stage;

    use crate::storage::MemoryStorage;
    use crate::store::StateStore;

    fn fintech_growth() -> SearchFilters {
        SearchFilters {
            sector: SectorFilter::Sector("Fintech".into()),
            stage: StageFilter::Only(Stage::Growth),
        }
    }

    #[test]
    fn save_names_search_by_default() {
        let mut store = StateStore::new(MemoryStorage::new());
        let search = store.save_search(None, "fintech", fintech_growth()).unwrap();
        assert_eq!(search.name, "Search: fintech (Fintech/Growth)");
        assert!(search.id.starts_with("srch-"));

        let all = store.save_search(Some("  "), "", SearchFilters::default()).unwrap();
        assert_eq!(all.name, "Search: All (All/All)");
        assert_eq!(store.saved_searches().len(), 2);
    }

    #[test]
    fn explicit_name_is_kept() {
        let mut store = StateStore::new(MemoryStorage::new());
        let search = store
            .save_search(Some("Late-stage fintech"), "fintech", fintech_growth())
            .unwrap();
        assert_eq!(store.saved_search(&search.id).unwrap().name, "Late-stage fintech");
    }

    #[test]
    fn run_builds_discovery_url() {
        let mut store = StateStore::new(MemoryStorage::new());
        let search = store.save_search(None, "fintech", fintech_growth()).unwrap();
        assert_eq!(
            store.run_search(&search).to_url(),
            "/companies?q=fintech&sector=Fintech&stage=Growth"
        );
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = StateStore::new(MemoryStorage::new());
        let search = store.save_search(None, "", SearchFilters::default()).unwrap();
        assert!(store.delete_search(&search.id).unwrap());
        assert!(!store.delete_search(&search.id).unwrap());
        assert!(store.saved_searches().is_empty());
    }
}
