use serde::Serialize;
use vantage_core::dashboard::{DashboardStats, SignalFeedItem, recent_signals};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DashboardResponse {
    stats: DashboardStats,
    recent_signals: Vec<SignalFeedItem>,
}

/// Handle `vantage dashboard`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let companies = ctx.catalog.companies();
    let stats = DashboardStats::compute(
        companies,
        ctx.store.lists().len(),
        ctx.store.saved_searches().len(),
    );
    let feed = recent_signals(companies, ctx.config.general.recent_signals);

    if flags.format == crate::cli::OutputFormat::Table {
        output(&stats, flags.format)?;
        println!();
        return output(&feed, flags.format);
    }

    output(
        &DashboardResponse {
            stats,
            recent_signals: feed,
        },
        flags.format,
    )
}
