//! # vantage-config
//!
//! Layered configuration loading for Vantage using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VANTAGE_*` prefix, `__` as separator)
//! 2. `GEMINI_API_KEY`, mapped to `gemini.api_key`
//! 3. Project-level `.vantage/config.toml`
//! 4. User-level `~/.config/vantage/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VANTAGE_SERVER__PORT` -> `server.port`,
//! `VANTAGE_GEMINI__MODEL` -> `gemini.model`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use vantage_config::VantageConfig;
//!
//! let config = VantageConfig::load_with_dotenv().expect("config");
//! if config.gemini.is_configured() {
//!     println!("model: {}", config.gemini.model);
//! }
//! ```

mod catalog;
mod error;
mod gemini;
mod general;
mod server;
mod store;

pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig};
pub use general::GeneralConfig;
pub use server::ServerConfig;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Conventional variable name for the provider key, honored without prefix.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VantageConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl VantageConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to parse or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading a `.env` file, if one exists.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".vantage/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
            .merge(
                Env::raw()
                    .only(&[GEMINI_API_KEY_VAR])
                    .map(|_| "gemini.api_key".into()),
            )
            .merge(Env::prefixed("VANTAGE_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vantage").join("config.toml"))
    }

    /// Walk up from `CARGO_MANIFEST_DIR` (at most 3 levels) looking for
    /// `.env`, then fall back to the current directory. Missing files are
    /// ignored.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = VantageConfig::default();
        assert!(!config.gemini.is_configured());
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.general.page_size, 5);
        assert_eq!(config.catalog.path, ".vantage/companies.json");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: VantageConfig = VantageConfig::figment().extract()?;
            assert_eq!(config.gemini.model, DEFAULT_MODEL);
            assert_eq!(config.store.quota_bytes, 5 * 1024 * 1024);
            Ok(())
        });
    }
}
