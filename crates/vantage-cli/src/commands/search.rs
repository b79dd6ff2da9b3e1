use serde::Serialize;
use serde_json::json;
use vantage_core::catalog::{CompanyQuery, paginate};
use vantage_core::entities::{SearchFilters, SectorFilter};
use vantage_core::errors::CoreError;
use vantage_core::navigation::NavigationIntent;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SearchCommands;
use crate::commands::companies::{CompanyRow, discover};
use crate::commands::shared::parse::parse_stage_filter;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RunResponse {
    search_id: String,
    url: String,
    #[serde(flatten)]
    intent: NavigationIntent,
    #[serde(skip_serializing_if = "Option::is_none")]
    results: Option<Vec<CompanyRow>>,
}

/// Handle `vantage search`.
pub fn handle(
    action: &SearchCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SearchCommands::Save {
            name,
            query,
            sector,
            stage,
        } => {
            let filters = SearchFilters {
                sector: if sector.eq_ignore_ascii_case("all") {
                    SectorFilter::All
                } else {
                    SectorFilter::from(sector.clone())
                },
                stage: parse_stage_filter(stage)?,
            };
            let search = ctx.store.save_search(name.as_deref(), query, filters)?;
            output(&search, flags.format)
        }
        SearchCommands::All => output(&ctx.store.saved_searches(), flags.format),
        SearchCommands::Delete { id } => {
            let deleted = ctx.store.delete_search(id)?;
            if !deleted {
                tracing::warn!(search_id = %id, "no saved search with this id");
            }
            output(&json!({ "id": id, "deleted": deleted }), flags.format)
        }
        SearchCommands::Run { id, results } => {
            let Some(search) = ctx.store.saved_search(id) else {
                return Err(CoreError::not_found("saved search", id).into());
            };
            let intent = ctx.store.run_search(&search);
            let results = results.then(|| {
                let query = CompanyQuery {
                    query: search.query.clone(),
                    filters: search.filters.clone(),
                    ..CompanyQuery::default()
                };
                paginate(
                    discover(&ctx.catalog, &query),
                    1,
                    ctx.config.general.page_size,
                )
                .items
            });
            output(
                &RunResponse {
                    search_id: search.id,
                    url: intent.to_url(),
                    intent,
                    results,
                },
                flags.format,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use vantage_core::entities::{SectorFilter, StageFilter};
    use vantage_core::enums::Stage;

    use super::handle;
    use crate::cli::subcommands::SearchCommands;
    use crate::cli::{GlobalFlags, OutputFormat};
    use crate::context::app_context::test_context;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
            verbose: false,
            state_dir: None,
        }
    }

    #[test]
    fn save_without_name_uses_default_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut ctx = test_context(dir.path(), "[]");

        handle(
            &SearchCommands::Save {
                name: None,
                query: "fintech".to_string(),
                sector: "Fintech".to_string(),
                stage: "growth".to_string(),
            },
            &mut ctx,
            &flags(),
        )
        .expect("save");

        let searches = ctx.store.saved_searches();
        assert_eq!(searches.len(), 1);
        assert_eq!(searches[0].name, "Search: fintech (Fintech/Growth)");
        assert_eq!(searches[0].filters.sector, SectorFilter::Sector("Fintech".into()));
        assert_eq!(searches[0].filters.stage, StageFilter::Only(Stage::Growth));
    }

    #[test]
    fn run_unknown_search_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut ctx = test_context(dir.path(), "[]");
        let err = handle(
            &SearchCommands::Run {
                id: "srch-00000000".to_string(),
                results: true,
            },
            &mut ctx,
            &flags(),
        )
        .expect_err("unknown search");
        assert!(err.to_string().contains("srch-00000000"));
    }
}
