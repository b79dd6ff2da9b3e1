use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Enrich(args) => commands::enrich::handle(&args, ctx, flags).await,
        Commands::Companies(args) => commands::companies::handle(&args, ctx, flags),
        Commands::Find(args) => commands::find::handle(&args, ctx, flags),
        Commands::Profile(args) => commands::profile::handle(&args, ctx, flags),
        Commands::Dashboard => commands::dashboard::handle(ctx, flags),
        Commands::List { action } => commands::list::handle(&action, ctx, flags),
        Commands::Search { action } => commands::search::handle(&action, ctx, flags),
        Commands::Note { action } => commands::note::handle(&action, ctx, flags),
        Commands::Serve(_) => unreachable!("serve is pre-dispatched in main"),
    }
}
