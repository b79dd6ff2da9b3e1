use std::path::{Path, PathBuf};

use anyhow::Context;
use vantage_config::VantageConfig;
use vantage_core::catalog::Catalog;
use vantage_core::entities::Company;
use vantage_core::errors::CoreError;
use vantage_store::{FileStorage, StateStore};

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: VantageConfig,
    pub store: StateStore<FileStorage>,
    pub catalog: Catalog,
}

impl AppContext {
    /// Open the state directory and load the company catalog.
    pub fn init(config: VantageConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let state_dir = flags
            .state_dir
            .as_deref()
            .map_or_else(|| config.store.dir_path(), PathBuf::from);
        tracing::debug!(dir = %state_dir.display(), "opening state directory");

        let storage = FileStorage::new(state_dir).with_quota(config.store.quota());
        let catalog = load_catalog(&config.catalog.file_path())?;

        Ok(Self {
            config,
            store: StateStore::new(storage),
            catalog,
        })
    }

    /// Look up a catalog company by id.
    pub fn company(&self, company_id: &str) -> anyhow::Result<&Company> {
        self.catalog
            .get(company_id)
            .ok_or_else(|| CoreError::not_found("company", company_id).into())
    }
}

/// A missing catalog file is an empty catalog; an unreadable or malformed one
/// is an error.
fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    if !path.exists() {
        tracing::warn!(
            path = %path.display(),
            "catalog file not found; starting with an empty catalog"
        );
        return Ok(Catalog::default());
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog = Catalog::from_json(&raw)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;
    tracing::debug!(companies = catalog.len(), "catalog loaded");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::{AppContext, load_catalog};
    use crate::cli::{GlobalFlags, OutputFormat};
    use vantage_config::VantageConfig;

    const CATALOG: &str = r#"[{
        "id": "1", "name": "Linear", "website": "https://linear.app",
        "logo": "", "description": "Issue tracking.", "sector": "Enterprise Software",
        "stage": "Series B", "location": "San Francisco, CA", "foundedYear": 2019,
        "totalFunding": "$52M", "lastFundingDate": "2023-09-12", "tags": [], "signals": []
    }]"#;

    fn flags(state_dir: &std::path::Path) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: true,
            verbose: false,
            state_dir: Some(state_dir.to_string_lossy().into_owned()),
        }
    }

    #[test]
    fn missing_catalog_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let catalog = load_catalog(&dir.path().join("nope.json")).expect("missing is ok");
        assert!(catalog.is_empty());
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("companies.json");
        std::fs::write(&path, "{not json").expect("write");
        let err = load_catalog(&path).expect_err("malformed catalog should fail");
        assert!(format!("{err:#}").contains("failed to parse catalog"));
    }

    #[test]
    fn init_uses_state_dir_override_and_catalog_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let catalog_path = dir.path().join("companies.json");
        std::fs::write(&catalog_path, CATALOG).expect("write catalog");

        let mut config = VantageConfig::default();
        config.catalog.path = catalog_path.to_string_lossy().into_owned();
        let state_dir = dir.path().join("state");

        let ctx = AppContext::init(config, &flags(&state_dir)).expect("context");
        assert_eq!(ctx.store.storage().dir(), state_dir.as_path());
        assert_eq!(ctx.company("1").expect("company").name, "Linear");
        assert!(ctx.company("99").is_err());
    }
}

/// Context over a temporary state directory.
#[cfg(test)]
pub(crate) fn test_context(dir: &std::path::Path, catalog_json: &str) -> AppContext {
    let mut config = VantageConfig::default();
    config.store.dir = dir.join("state").to_string_lossy().into_owned();
    AppContext {
        store: StateStore::new(FileStorage::new(config.store.dir_path())),
        catalog: Catalog::from_json(catalog_json).expect("test catalog"),
        config,
    }
}
