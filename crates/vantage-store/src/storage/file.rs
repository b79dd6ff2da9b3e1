use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{Storage, check_quota, entry_size};
use crate::error::StoreError;

const EXTENSION: &str = ".json";

/// One file per key under a directory. Key names are percent-encoded into
/// file names; writes go through a temporary file and a rename.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
    quota: Option<u64>,
}

impl FileStorage {
    /// Storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            quota: None,
        }
    }

    /// Limit the total bytes (keys plus documents) held in the directory.
    #[must_use]
    pub const fn with_quota(mut self, quota: Option<u64>) -> Self {
        self.quota = quota;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{}{EXTENSION}", urlencoding::encode(key)))
    }

    fn used_bytes_excluding(&self, key: &str) -> Result<u64, StoreError> {
        let mut total = 0;
        for other in self.keys()? {
            if other == key {
                continue;
            }
            match fs::metadata(self.path_for(&other)) {
                Ok(meta) => total += entry_size(&other, meta.len()),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(total)
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.quota.is_some() {
            let needed = self.used_bytes_excluding(key)? + entry_size(key, value.len() as u64);
            check_quota(key, needed, self.quota)?;
        }

        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!(key, path = %path.display(), bytes = value.len(), "wrote document");
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => {
                debug!(key, "removed document");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> Result<Vec<String>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(stem) = file_name
                .to_str()
                .and_then(|name| name.strip_suffix(EXTENSION))
            else {
                continue;
            };
            if let Ok(key) = urlencoding::decode(stem) {
                keys.push(key.into_owned());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_directory_reads_as_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(tmp.path().join("absent"));
        assert_eq!(storage.get_item("company_lists").unwrap(), None);
        assert!(storage.keys().unwrap().is_empty());
    }

    #[test]
    fn keys_are_encoded_into_file_names() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(tmp.path());
        storage.set_item("notes_a/b", "[]").unwrap();
        assert!(tmp.path().join("notes_a%2Fb.json").exists());
        assert_eq!(storage.keys().unwrap(), vec!["notes_a/b".to_string()]);
        assert_eq!(storage.get_item("notes_a/b").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn quota_spans_the_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(tmp.path()).with_quota(Some(20));
        storage.set_item("a", "123456789").unwrap();
        let err = storage.set_item("b", "1234567890").unwrap_err();
        assert!(matches!(err, StoreError::Quota { needed: 21, .. }));
        assert_eq!(storage.get_item("b").unwrap(), None);
        assert_eq!(storage.keys().unwrap(), vec!["a".to_string()]);
    }

    #[test]
    fn remove_missing_key_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(tmp.path());
        storage.remove_item("nope").unwrap();
    }
}
