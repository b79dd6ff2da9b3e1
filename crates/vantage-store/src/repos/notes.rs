//! Free-text notes per company, most recent first.

use tracing::debug;

use crate::error::StoreError;
use crate::keys;
use crate::storage::Storage;
use crate::store::StateStore;

impl<S: Storage> StateStore<S> {
    pub fn notes(&self, company_id: &str) -> Vec<String> {
        self.load(&keys::notes(company_id))
    }

    /// Prepend a note. Blank text is ignored and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns the write error.
    pub fn add_note(&mut self, company_id: &str, text: &str) -> Result<bool, StoreError> {
        if text.trim().is_empty() {
            return Ok(false);
        }
        let key = keys::notes(company_id);
        let mut notes: Vec<String> = self.load(&key);
        notes.insert(0, text.to_string());
        self.save(&key, &notes)?;
        debug!(company_id, count = notes.len(), "added note");
        Ok(true)
    }
}
