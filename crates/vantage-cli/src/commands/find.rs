use vantage_core::catalog::Catalog;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FindArgs;
use crate::commands::companies::CompanyRow;
use crate::context::AppContext;
use crate::output::output;

/// Handle `vantage find`.
pub fn handle(args: &FindArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&find_rows(&ctx.catalog, &args.term, args.limit), flags.format)
}

fn find_rows(catalog: &Catalog, term: &str, limit: usize) -> Vec<CompanyRow> {
    catalog
        .quick_search(term, limit)
        .into_iter()
        .map(CompanyRow::from)
        .collect()
}
