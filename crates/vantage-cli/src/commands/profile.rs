use serde::Serialize;
use vantage_core::entities::{Company, EnrichmentRecord};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProfileArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProfileResponse<'a> {
    company: &'a Company,
    enrichment: Option<EnrichmentRecord>,
    notes: Vec<String>,
}

/// Handle `vantage profile`.
pub fn handle(args: &ProfileArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let company = ctx.company(&args.company_id)?;
    output(
        &ProfileResponse {
            company,
            enrichment: ctx.store.cached_enrichment(&company.id),
            notes: ctx.store.notes(&company.id),
        },
        flags.format,
    )
}
