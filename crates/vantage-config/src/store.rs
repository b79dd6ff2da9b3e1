//! Client state store configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Roughly what browsers grant a single origin for local storage.
const fn default_quota_bytes() -> u64 {
    5 * 1024 * 1024
}

fn default_store_dir() -> String {
    ".vantage/state".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Directory holding one document per key.
    #[serde(default = "default_store_dir")]
    pub dir: String,

    /// Total bytes the store may occupy. `0` disables the limit.
    #[serde(default = "default_quota_bytes")]
    pub quota_bytes: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: default_store_dir(),
            quota_bytes: default_quota_bytes(),
        }
    }
}

impl StoreConfig {
    pub fn dir_path(&self) -> PathBuf {
        PathBuf::from(&self.dir)
    }

    /// The quota as an `Option`, `None` meaning unlimited.
    pub const fn quota(&self) -> Option<u64> {
        if self.quota_bytes == 0 {
            None
        } else {
            Some(self.quota_bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_quota_means_unlimited() {
        let config = StoreConfig {
            quota_bytes: 0,
            ..Default::default()
        };
        assert_eq!(config.quota(), None);
        assert_eq!(StoreConfig::default().quota(), Some(5 * 1024 * 1024));
    }

    #[test]
    fn default_dir() {
        assert_eq!(StoreConfig::default().dir_path(), PathBuf::from(".vantage/state"));
    }
}
