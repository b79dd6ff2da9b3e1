use std::path::Path;

use anyhow::Context;
use serde_json::json;
use vantage_core::entities::CompanyList;
use vantage_core::export::{ExportFormat, export_list};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Write the export to `out_dir`, or print the raw content with `--stdout`.
pub fn run(
    list: &CompanyList,
    export_as: &str,
    out_dir: &str,
    to_stdout: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let format = parse_enum::<ExportFormat>(export_as, "export format")?;
    let export = export_list(list, &ctx.catalog, format)?;

    if to_stdout {
        println!("{}", export.content);
        return Ok(());
    }

    let dir = Path::new(out_dir);
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(&export.file_name);
    std::fs::write(&path, &export.content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), %format, "list exported");

    output(
        &json!({
            "list": list.id,
            "format": format,
            "path": path.display().to_string(),
            "content_type": export.content_type,
        }),
        flags.format,
    )
}
