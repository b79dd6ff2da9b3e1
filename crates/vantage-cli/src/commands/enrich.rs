use std::time::Duration;

use serde::Serialize;
use vantage_core::entities::EnrichmentRecord;
use vantage_enrich::{Enricher, GeminiClient, RemoteEnricher};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EnrichArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct EnrichResponse {
    company_id: String,
    degraded: bool,
    enrichment: EnrichmentRecord,
}

/// Handle `vantage enrich`.
///
/// The result replaces the cached enrichment for the company. A failed
/// enrichment leaves the cache untouched.
pub async fn handle(
    args: &EnrichArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let company = ctx.company(&args.company_id)?;
    let url = args.url.clone().unwrap_or_else(|| company.website.clone());
    let name = args.name.clone().unwrap_or_else(|| company.name.clone());

    let record = match &args.server {
        Some(server) => {
            let timeout = ctx.config.gemini.timeout_secs.map(Duration::from_secs);
            RemoteEnricher::new(server.as_str(), timeout)?
                .enrich(&url, &name)
                .await?
        }
        None => {
            let client = GeminiClient::from_config(&ctx.config.gemini)?;
            Enricher::new(client, ctx.config.gemini.model.clone())
                .enrich(&url, &name)
                .await?
        }
    };

    ctx.store.set_cached_enrichment(&args.company_id, &record)?;

    output(
        &EnrichResponse {
            company_id: args.company_id.clone(),
            degraded: record.is_degraded(),
            enrichment: record,
        },
        flags.format,
    )
}
