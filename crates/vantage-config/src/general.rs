//! General application configuration.

use serde::{Deserialize, Serialize};

/// Rows per page in the discovery view.
const fn default_page_size() -> usize {
    5
}

/// Entries in the dashboard's recent-signal feed.
const fn default_recent_signals() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Page size for `vantage companies`.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Number of signals shown by `vantage dashboard`.
    #[serde(default = "default_recent_signals")]
    pub recent_signals: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            recent_signals: default_recent_signals(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.recent_signals, 5);
    }
}
