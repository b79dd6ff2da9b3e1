use anyhow::bail;
use serde::Serialize;
use serde_json::json;
use vantage_core::entities::CompanyList;
use vantage_core::errors::CoreError;
use vantage_store::ListsView;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ListCommands;
use crate::commands::companies::CompanyRow;
use crate::context::AppContext;
use crate::output::output;

mod export;

#[derive(Debug, Serialize)]
struct ListSummary {
    id: String,
    name: String,
    companies: usize,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&CompanyList> for ListSummary {
    fn from(list: &CompanyList) -> Self {
        Self {
            id: list.id.clone(),
            name: list.name.clone(),
            companies: list.company_ids.len(),
            created_at: list.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
struct ListDetail {
    list: CompanyList,
    companies: Vec<CompanyRow>,
    /// Ids no longer present in the catalog.
    missing: Vec<String>,
}

/// Handle `vantage list`.
pub fn handle(action: &ListCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = ListsView::load(&ctx.store);

    match action {
        ListCommands::Create { name } => {
            let Some(list) = view.create(&mut ctx.store, name)? else {
                bail!("list name must not be blank");
            };
            output(&list, flags.format)
        }
        ListCommands::All => {
            let summaries = view.lists().iter().map(ListSummary::from).collect::<Vec<_>>();
            output(&summaries, flags.format)
        }
        ListCommands::Show { list } => {
            let list = select(&mut view, ctx, list)?;
            let companies = ctx
                .catalog
                .resolve(&list.company_ids)
                .into_iter()
                .map(CompanyRow::from)
                .collect::<Vec<_>>();
            let missing = list
                .company_ids
                .iter()
                .filter(|id| ctx.catalog.get(id).is_none())
                .cloned()
                .collect();
            output(
                &ListDetail {
                    list,
                    companies,
                    missing,
                },
                flags.format,
            )
        }
        ListCommands::Add { list, company_ids } => {
            let list = select(&mut view, ctx, list)?;
            for id in company_ids {
                if ctx.catalog.get(id).is_none() {
                    tracing::warn!(company_id = %id, "company is not in the catalog");
                }
            }
            let outcome = view.add_companies(&mut ctx.store, &list.id, company_ids)?;
            output(
                &json!({
                    "list": outcome.list,
                    "added": outcome.added_count,
                }),
                flags.format,
            )
        }
        ListCommands::Remove { list, company_id } => {
            let list = select(&mut view, ctx, list)?;
            let removed = view.remove_company(&mut ctx.store, &list.id, company_id)?;
            output(
                &json!({
                    "list": view.selected(),
                    "removed": removed,
                }),
                flags.format,
            )
        }
        ListCommands::Delete { list } => {
            let list = select(&mut view, ctx, list)?;
            let deleted = view.delete(&mut ctx.store, &list.id)?;
            output(
                &json!({
                    "id": list.id,
                    "deleted": deleted,
                }),
                flags.format,
            )
        }
        ListCommands::Export {
            list,
            export_as,
            out_dir,
            stdout,
        } => {
            let list = select(&mut view, ctx, list)?;
            export::run(&list, export_as, out_dir, *stdout, ctx, flags)
        }
    }
}

/// Resolve a list by id or exact name and make it the view's selection.
fn select(view: &mut ListsView, ctx: &AppContext, id_or_name: &str) -> anyhow::Result<CompanyList> {
    let list = ctx
        .store
        .find_list(id_or_name)
        .ok_or_else(|| CoreError::not_found("list", id_or_name))?;
    view.select(&list.id);
    Ok(list)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::handle;
    use crate::cli::subcommands::ListCommands;
    use crate::cli::{GlobalFlags, OutputFormat};
    use crate::context::app_context::test_context;

    const CATALOG: &str = r#"[
        {"id": "1", "name": "Linear", "website": "https://linear.app", "sector": "Enterprise Software",
         "stage": "Series B", "location": "San Francisco, CA", "foundedYear": 2019,
         "totalFunding": "$52M", "lastFundingDate": "2023-09-12"},
        {"id": "4", "name": "Ramp", "website": "https://ramp.com", "sector": "Fintech",
         "stage": "Growth", "location": "New York, NY", "foundedYear": 2019,
         "totalFunding": "$1.7B", "lastFundingDate": "2024-04-17"}
    ]"#;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            quiet: true,
            verbose: false,
            state_dir: None,
        }
    }

    #[test]
    fn create_add_remove_by_name() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut ctx = test_context(dir.path(), CATALOG);

        handle(
            &ListCommands::Create {
                name: " Seed Bets ".to_string(),
            },
            &mut ctx,
            &flags(),
        )
        .expect("create");
        handle(
            &ListCommands::Add {
                list: "Seed Bets".to_string(),
                company_ids: vec!["1".to_string(), "4".to_string(), "1".to_string()],
            },
            &mut ctx,
            &flags(),
        )
        .expect("add");

        let list = ctx.store.find_list("Seed Bets").expect("list by trimmed name");
        assert_eq!(list.company_ids, vec!["1", "4"]);

        handle(
            &ListCommands::Remove {
                list: list.id.clone(),
                company_id: "1".to_string(),
            },
            &mut ctx,
            &flags(),
        )
        .expect("remove");
        assert_eq!(
            ctx.store.list(&list.id).expect("list").company_ids,
            vec!["4"]
        );
    }

    #[test]
    fn blank_name_and_unknown_list_are_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut ctx = test_context(dir.path(), CATALOG);

        assert!(
            handle(
                &ListCommands::Create {
                    name: "   ".to_string()
                },
                &mut ctx,
                &flags()
            )
            .is_err()
        );
        assert!(ctx.store.lists().is_empty());

        let err = handle(
            &ListCommands::Delete {
                list: "nope".to_string(),
            },
            &mut ctx,
            &flags(),
        )
        .expect_err("unknown list");
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn export_of_slashed_name_stays_in_out_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut ctx = test_context(dir.path(), CATALOG);
        let list = ctx
            .store
            .create_list("../Q3/Q4 picks")
            .expect("create")
            .expect("named list");

        let out_dir = dir.path().join("exports");
        handle(
            &ListCommands::Export {
                list: list.id.clone(),
                export_as: "json".to_string(),
                out_dir: out_dir.to_string_lossy().into_owned(),
                stdout: false,
            },
            &mut ctx,
            &flags(),
        )
        .expect("export");

        let written: Vec<String> = std::fs::read_dir(&out_dir)
            .expect("out dir")
            .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(written, vec!["___q3_q4_picks_export.json"]);
    }

    #[test]
    fn export_writes_csv_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut ctx = test_context(dir.path(), CATALOG);
        let list = ctx
            .store
            .create_list("Fintech Watch")
            .expect("create")
            .expect("named list");
        ctx.store
            .add_companies_to_list(&list.id, ["4"])
            .expect("add");

        let out_dir = dir.path().join("exports");
        handle(
            &ListCommands::Export {
                list: list.id.clone(),
                export_as: "csv".to_string(),
                out_dir: out_dir.to_string_lossy().into_owned(),
                stdout: false,
            },
            &mut ctx,
            &flags(),
        )
        .expect("export");

        let written = std::fs::read_to_string(out_dir.join("fintech_watch_export.csv"))
            .expect("export file");
        assert_eq!(
            written,
            "Name,Website,Sector,Stage,Location,Funding\n\
             Ramp,https://ramp.com,Fintech,Growth,\"New York, NY\",$1.7B"
        );
    }
}
