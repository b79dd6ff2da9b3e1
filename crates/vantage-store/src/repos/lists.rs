//! Company list repository.

use chrono::Utc;
use tracing::{debug, info};

use vantage_core::entities::CompanyList;
use vantage_core::ids::{PREFIX_LIST, generate_unique_id};

use crate::error::StoreError;
use crate::keys;
use crate::storage::Storage;
use crate::store::StateStore;

/// Result of adding companies to a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// The list as persisted after the call.
    pub list: CompanyList,
    pub added_count: usize,
}

impl<S: Storage> StateStore<S> {
    pub fn lists(&self) -> Vec<CompanyList> {
        self.load(keys::COMPANY_LISTS)
    }

    pub fn list(&self, list_id: &str) -> Option<CompanyList> {
        self.lists().into_iter().find(|l| l.id == list_id)
    }

    /// First list whose name equals `name` exactly.
    pub fn find_list_by_name(&self, name: &str) -> Option<CompanyList> {
        self.lists().into_iter().find(|l| l.name == name)
    }

    /// Resolve a list by id, falling back to an exact name match.
    pub fn find_list(&self, id_or_name: &str) -> Option<CompanyList> {
        let lists = self.lists();
        lists
            .iter()
            .find(|l| l.id == id_or_name)
            .or_else(|| lists.iter().find(|l| l.name == id_or_name))
            .cloned()
    }

    /// Create an empty list. A blank name is ignored and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if id generation or the write fails.
    pub fn create_list(&mut self, name: &str) -> Result<Option<CompanyList>, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let mut lists = self.lists();
        let list = CompanyList {
            id: generate_unique_id(PREFIX_LIST, |id| lists.iter().any(|l| l.id == id))?,
            name: name.to_string(),
            company_ids: Vec::new(),
            created_at: Utc::now(),
        };
        lists.push(list.clone());
        self.save(keys::COMPANY_LISTS, &lists)?;
        info!(list_id = %list.id, name = %list.name, "created list");
        Ok(Some(list))
    }

    /// Append `company_ids` to a list, skipping ids already present (in the
    /// list or earlier in the input). Nothing new means no write.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ListNotFound`] for an unknown list, or the
    /// write error.
    pub fn add_companies_to_list<I, T>(
        &mut self,
        list_id: &str,
        company_ids: I,
    ) -> Result<AddOutcome, StoreError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut lists = self.lists();
        let list = lists
            .iter_mut()
            .find(|l| l.id == list_id)
            .ok_or_else(|| StoreError::ListNotFound(list_id.to_string()))?;

        let added_count = list.add_companies(company_ids);
        let list = list.clone();
        if added_count > 0 {
            self.save(keys::COMPANY_LISTS, &lists)?;
        }
        debug!(list_id, added_count, "added companies to list");
        Ok(AddOutcome { list, added_count })
    }

    /// Drop one company from a list. Unknown list or id is a silent no-op.
    /// Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Returns the write error.
    pub fn remove_company_from_list(
        &mut self,
        list_id: &str,
        company_id: &str,
    ) -> Result<bool, StoreError> {
        let mut lists = self.lists();
        let removed = lists
            .iter_mut()
            .find(|l| l.id == list_id)
            .is_some_and(|l| l.remove_company(company_id));
        if removed {
            self.save(keys::COMPANY_LISTS, &lists)?;
        }
        Ok(removed)
    }

    /// Delete a list. Idempotent; returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns the write error.
    pub fn delete_list(&mut self, list_id: &str) -> Result<bool, StoreError> {
        let mut lists = self.lists();
        let before = lists.len();
        lists.retain(|l| l.id != list_id);
        if lists.len() == before {
            return Ok(false);
        }
        self.save(keys::COMPANY_LISTS, &lists)?;
        info!(list_id, "deleted list");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::error::StoreError;
    use crate::storage::{MemoryStorage, Storage};
    use crate::store::StateStore;

    fn store() -> StateStore<MemoryStorage> {
        StateStore::new(MemoryStorage::new())
    }

    #[test]
    fn created_list_ids_are_distinct() {
        let mut store = store();
        for i in 0..50 {
            store.create_list(&format!("List {i}")).unwrap();
        }
        let mut ids: Vec<String> = store.lists().into_iter().map(|l| l.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_name_creates_nothing(#[case] name: &str) {
        let mut store = store();
        assert_eq!(store.create_list(name).unwrap(), None);
        assert!(store.storage().keys().unwrap().is_empty());
    }

    #[test]
    fn create_appends_with_fresh_id() {
        let mut store = store();
        let first = store.create_list("Seed Bets").unwrap().unwrap();
        let second = store.create_list(" Portfolio ").unwrap().unwrap();
        assert!(first.id.starts_with("lst-"));
        assert_ne!(first.id, second.id);
        assert_eq!(second.name, "Portfolio");
        let names: Vec<String> = store.lists().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Seed Bets", "Portfolio"]);
    }

    #[test]
    fn add_merges_without_duplicates() {
        let mut store = store();
        let list = store.create_list("Seed Bets").unwrap().unwrap();
        store.add_companies_to_list(&list.id, ["1", "2"]).unwrap();
        let outcome = store.add_companies_to_list(&list.id, ["2", "3"]).unwrap();
        assert_eq!(outcome.added_count, 1);
        assert_eq!(store.list(&list.id).unwrap().company_ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn add_dedupes_within_input() {
        let mut store = store();
        let list = store.create_list("L").unwrap().unwrap();
        store.add_companies_to_list(&list.id, ["c1"]).unwrap();
        let outcome = store
            .add_companies_to_list(&list.id, ["c1", "c1", "c2"])
            .unwrap();
        assert_eq!(outcome.added_count, 1);
        assert_eq!(outcome.list.company_ids, vec!["c1", "c2"]);
    }

    #[test]
    fn add_nothing_new_skips_write() {
        let mut store = StateStore::new(MemoryStorage::with_quota(1024));
        let list = store.create_list("L").unwrap().unwrap();
        store.add_companies_to_list(&list.id, ["1"]).unwrap();
        let before = store.storage().get_item("company_lists").unwrap();

        let outcome = store.add_companies_to_list(&list.id, ["1"]).unwrap();
        assert_eq!(outcome.added_count, 0);
        assert_eq!(store.storage().get_item("company_lists").unwrap(), before);
    }

    #[test]
    fn add_to_unknown_list_fails() {
        let mut store = store();
        let err = store.add_companies_to_list("lst-missing", ["1"]).unwrap_err();
        assert!(matches!(err, StoreError::ListNotFound(id) if id == "lst-missing"));
    }

    #[test]
    fn remove_company_is_silent_when_absent() {
        let mut store = store();
        let list = store.create_list("L").unwrap().unwrap();
        store.add_companies_to_list(&list.id, ["1", "2"]).unwrap();

        assert!(store.remove_company_from_list(&list.id, "1").unwrap());
        assert!(!store.remove_company_from_list(&list.id, "1").unwrap());
        assert!(!store.remove_company_from_list("lst-missing", "2").unwrap());
        assert_eq!(store.list(&list.id).unwrap().company_ids, vec!["2"]);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = store();
        let list = store.create_list("L").unwrap().unwrap();
        assert!(store.delete_list(&list.id).unwrap());
        assert!(store.list(&list.id).is_none());
        assert!(!store.delete_list(&list.id).unwrap());
    }

    #[test]
    fn find_list_by_id_or_name() {
        let mut store = store();
        let list = store.create_list("Seed Bets").unwrap().unwrap();
        assert_eq!(store.find_list(&list.id).unwrap().id, list.id);
        assert_eq!(store.find_list("Seed Bets").unwrap().id, list.id);
        assert_eq!(store.find_list_by_name("Seed Bets").unwrap().id, list.id);
        assert!(store.find_list("seed bets").is_none());
    }

    #[test]
    fn quota_failure_leaves_previous_document() {
        let mut store = StateStore::new(MemoryStorage::with_quota(200));
        let list = store.create_list("L").unwrap().unwrap();
        let ids: Vec<String> = (0..50).map(|i| format!("company-{i}")).collect();
        let err = store.add_companies_to_list(&list.id, &ids).unwrap_err();
        assert!(matches!(err, StoreError::Quota { .. }));
        assert!(store.list(&list.id).unwrap().company_ids.is_empty());
    }
}
