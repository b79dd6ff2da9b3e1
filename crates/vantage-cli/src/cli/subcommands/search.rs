use clap::Subcommand;

/// Saved search commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SearchCommands {
    /// Save a query and filters.
    Save {
        /// Name (defaults to "Search: <query> (<sector>/<stage>)")
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = "All")]
        sector: String,
        #[arg(long, default_value = "All")]
        stage: String,
    },
    /// Show all saved searches.
    All,
    /// Delete a saved search.
    Delete { id: String },
    /// Print the discovery URL that re-applies a saved search.
    Run {
        id: String,
        /// Also show the first page of matching companies
        #[arg(long)]
        results: bool,
    },
}
