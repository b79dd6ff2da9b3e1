use anyhow::bail;
use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::NoteCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `vantage note`.
pub fn handle(action: &NoteCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        NoteCommands::Add { company_id, text } => {
            if ctx.catalog.get(company_id).is_none() {
                tracing::warn!(%company_id, "company is not in the catalog");
            }
            if !ctx.store.add_note(company_id, text)? {
                bail!("note text must not be blank");
            }
            output(
                &json!({
                    "company_id": company_id,
                    "notes": ctx.store.notes(company_id),
                }),
                flags.format,
            )
        }
        NoteCommands::All { company_id } => output(&ctx.store.notes(company_id), flags.format),
    }
}
