//! Enrichment cache, one record per company.

use tracing::debug;

use vantage_core::entities::EnrichmentRecord;

use crate::error::StoreError;
use crate::keys;
use crate::storage::Storage;
use crate::store::StateStore;

impl<S: Storage> StateStore<S> {
    pub fn cached_enrichment(&self, company_id: &str) -> Option<EnrichmentRecord> {
        self.load(&keys::enrichment(company_id))
    }

    /// Overwrite the cached record for `company_id`.
    ///
    /// # Errors
    ///
    /// Returns the write error; the previous record stays in place.
    pub fn set_cached_enrichment(
        &mut self,
        company_id: &str,
        record: &EnrichmentRecord,
    ) -> Result<(), StoreError> {
        self.save(&keys::enrichment(company_id), record)?;
        debug!(company_id, "cached enrichment");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use vantage_core::entities::{EnrichmentRecord, Source};

    use crate::storage::MemoryStorage;
    use crate::store::StateStore;

    fn record(summary: &str) -> EnrichmentRecord {
        EnrichmentRecord {
            summary: Some(summary.into()),
            keywords: Some(vec!["SaaS".into()]),
            sources: vec![Source {
                url: "https://linear.app".into(),
                timestamp: Utc::now(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn cache_overwrites_wholesale() {
        let mut store = StateStore::new(MemoryStorage::new());
        assert!(store.cached_enrichment("1").is_none());

        store.set_cached_enrichment("1", &record("old")).unwrap();
        let newer = EnrichmentRecord {
            sources: record("new").sources,
            ..Default::default()
        };
        store.set_cached_enrichment("1", &newer).unwrap();
        assert_eq!(store.cached_enrichment("1").unwrap(), newer);
    }
}
