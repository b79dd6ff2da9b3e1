use chrono::NaiveDate;
use serde::Serialize;
use vantage_core::catalog::{Catalog, CompanyQuery, Page, paginate};
use vantage_core::entities::{Company, SectorFilter};
use vantage_core::enums::{SortField, SortOrder, Stage};
use vantage_core::navigation::parse_discovery_query;

use crate::cli::root_commands::CompaniesArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse::{parse_enum, parse_stage_filter};
use crate::context::AppContext;
use crate::output::output;

/// One line of the discovery table.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyRow {
    pub id: String,
    pub name: String,
    pub sector: String,
    pub stage: Stage,
    pub location: String,
    pub founded_year: i32,
    pub total_funding: String,
    pub last_funding_date: NaiveDate,
}

impl From<&Company> for CompanyRow {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id.clone(),
            name: company.name.clone(),
            sector: company.sector.clone(),
            stage: company.stage,
            location: company.location.clone(),
            founded_year: company.founded_year,
            total_funding: company.total_funding.clone(),
            last_funding_date: company.last_funding_date,
        }
    }
}

#[derive(Debug, Serialize)]
struct CompaniesResponse {
    query: CompanyQuery,
    #[serde(flatten)]
    page: Page<CompanyRow>,
}

/// Handle `vantage companies`.
pub fn handle(args: &CompaniesArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = build_query(args)?;
    let rows = discover(&ctx.catalog, &query);
    let page = paginate(rows, args.page, ctx.config.general.page_size);
    output_page(query, page, flags)
}

/// Filtered and sorted catalog rows for `query`.
pub fn discover(catalog: &Catalog, query: &CompanyQuery) -> Vec<CompanyRow> {
    catalog.query(query).into_iter().map(CompanyRow::from).collect()
}

/// Print a page of rows; table output gets a page footer instead of the
/// page metadata.
pub fn output_page(
    query: CompanyQuery,
    page: Page<CompanyRow>,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if flags.format == OutputFormat::Table {
        output(&page.items, flags.format)?;
        println!(
            "\npage {} of {} ({} companies)",
            page.page,
            page.total_pages.max(1),
            page.total_items
        );
        return Ok(());
    }
    output(&CompaniesResponse { query, page }, flags.format)
}

/// Start from `--from` (a discovery URL or bare query string), then let
/// explicit flags override.
fn build_query(args: &CompaniesArgs) -> anyhow::Result<CompanyQuery> {
    let mut query = match &args.from {
        Some(from) => {
            let query_string = from.split_once('?').map_or(from.as_str(), |(_, qs)| qs);
            parse_discovery_query(query_string)?
        }
        None => CompanyQuery::default(),
    };

    if let Some(text) = &args.query {
        query.query.clone_from(text);
    }
    if let Some(sector) = &args.sector {
        query.filters.sector = if sector.eq_ignore_ascii_case("all") {
            SectorFilter::All
        } else {
            SectorFilter::from(sector.clone())
        };
    }
    if let Some(stage) = &args.stage {
        query.filters.stage = parse_stage_filter(stage)?;
    }
    if let Some(sort) = &args.sort {
        query.sort.field = parse_enum::<SortField>(sort, "sort")?;
    }
    if args.desc {
        query.sort.order = SortOrder::Desc;
    }
    Ok(query)
}
