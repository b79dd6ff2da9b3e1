use std::collections::BTreeMap;

use super::{Storage, check_quota, entry_size};
use crate::error::StoreError;

/// In-process storage. Used by tests and as a scratch store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: BTreeMap<String, String>,
    quota: Option<u64>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects writes pushing the total past `limit` bytes.
    #[must_use]
    pub fn with_quota(limit: u64) -> Self {
        Self {
            items: BTreeMap::new(),
            quota: Some(limit),
        }
    }

    #[must_use]
    pub fn used_bytes(&self) -> u64 {
        self.items
            .iter()
            .map(|(k, v)| entry_size(k, v.len() as u64))
            .sum()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.quota.is_some() {
            let others: u64 = self
                .items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| entry_size(k, v.len() as u64))
                .sum();
            check_quota(key, others + entry_size(key, value.len() as u64), self.quota)?;
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        self.items.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.items.keys().cloned().collect())
    }
}
