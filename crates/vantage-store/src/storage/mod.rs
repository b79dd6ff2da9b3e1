//! Key/value storage media behind the state store.
//!
//! Values are opaque text documents. Each key is written atomically on its
//! own; there is no multi-key transaction.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::StoreError;

/// Synchronous text key/value medium.
pub trait Storage {
    /// Read the document at `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the medium cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the document at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Quota`] when the write would exceed the byte
    /// quota (the previous document is left intact), or [`StoreError::Io`].
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the document at `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the medium cannot be written.
    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;

    /// All keys currently present, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when the medium cannot be listed.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// Bytes charged for one entry: key plus value.
pub(crate) const fn entry_size(key: &str, value_len: u64) -> u64 {
    key.len() as u64 + value_len
}

pub(crate) fn check_quota(key: &str, needed: u64, quota: Option<u64>) -> Result<(), StoreError> {
    match quota {
        Some(limit) if needed > limit => Err(StoreError::Quota {
            key: key.to_string(),
            needed,
            limit,
        }),
        _ => Ok(()),
    }
}
