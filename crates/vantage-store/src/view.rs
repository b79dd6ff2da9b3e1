//! In-memory list management state layered over the store.
//!
//! Mutations go to the store first; the held collection and selection only
//! change once the write has succeeded, so a rejected write (quota, I/O)
//! leaves the view showing the last persisted state.

use vantage_core::entities::CompanyList;

use crate::error::StoreError;
use crate::repos::AddOutcome;
use crate::storage::Storage;
use crate::store::StateStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListsView {
    lists: Vec<CompanyList>,
    selected: Option<String>,
}

impl ListsView {
    /// Load the persisted lists with nothing selected.
    pub fn load<S: Storage>(store: &StateStore<S>) -> Self {
        Self {
            lists: store.lists(),
            selected: None,
        }
    }

    pub fn lists(&self) -> &[CompanyList] {
        &self.lists
    }

    pub fn selected(&self) -> Option<&CompanyList> {
        let id = self.selected.as_deref()?;
        self.lists.iter().find(|l| l.id == id)
    }

    /// Select a held list. Returns false (selection unchanged) for an
    /// unknown id.
    pub fn select(&mut self, list_id: &str) -> bool {
        if self.lists.iter().any(|l| l.id == list_id) {
            self.selected = Some(list_id.to_string());
            true
        } else {
            false
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// # Errors
    ///
    /// Returns the store error; the view is unchanged.
    pub fn create<S: Storage>(
        &mut self,
        store: &mut StateStore<S>,
        name: &str,
    ) -> Result<Option<CompanyList>, StoreError> {
        let created = store.create_list(name)?;
        if created.is_some() {
            self.refresh(store);
        }
        Ok(created)
    }

    /// # Errors
    ///
    /// Returns the store error; the view is unchanged.
    pub fn add_companies<S, I, T>(
        &mut self,
        store: &mut StateStore<S>,
        list_id: &str,
        company_ids: I,
    ) -> Result<AddOutcome, StoreError>
    where
        S: Storage,
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let outcome = store.add_companies_to_list(list_id, company_ids)?;
        if let Some(held) = self.lists.iter_mut().find(|l| l.id == list_id) {
            *held = outcome.list.clone();
        }
        Ok(outcome)
    }

    /// # Errors
    ///
    /// Returns the store error; the view is unchanged.
    pub fn remove_company<S: Storage>(
        &mut self,
        store: &mut StateStore<S>,
        list_id: &str,
        company_id: &str,
    ) -> Result<bool, StoreError> {
        let removed = store.remove_company_from_list(list_id, company_id)?;
        if removed && let Some(held) = self.lists.iter_mut().find(|l| l.id == list_id) {
            held.remove_company(company_id);
        }
        Ok(removed)
    }

    /// Delete a list. Deleting the selected list clears the selection.
    ///
    /// # Errors
    ///
    /// Returns the store error; the view is unchanged.
    pub fn delete<S: Storage>(
        &mut self,
        store: &mut StateStore<S>,
        list_id: &str,
    ) -> Result<bool, StoreError> {
        let deleted = store.delete_list(list_id)?;
        self.lists.retain(|l| l.id != list_id);
        if self.selected.as_deref() == Some(list_id) {
            self.selected = None;
        }
        Ok(deleted)
    }

    fn refresh<S: Storage>(&mut self, store: &StateStore<S>) {
        self.lists = store.lists();
        if let Some(id) = self.selected.as_deref()
            && !self.lists.iter().any(|l| l.id == id)
        {
            self.selected = None;
        }
    }
}
