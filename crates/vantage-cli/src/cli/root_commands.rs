use clap::{Args, Subcommand};

use crate::cli::subcommands::{ListCommands, NoteCommands, SearchCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the enrichment HTTP server.
    Serve(ServeArgs),
    /// Enrich a company from its website and cache the result.
    Enrich(EnrichArgs),
    /// Browse the catalog: search, filter, sort, paginate.
    Companies(CompaniesArgs),
    /// Quick lookup by name or sector.
    Find(FindArgs),
    /// Show a company with its cached enrichment and notes.
    Profile(ProfileArgs),
    /// Headline counts and the most recent signals.
    Dashboard,
    /// Company lists.
    List {
        #[command(subcommand)]
        action: ListCommands,
    },
    /// Saved searches.
    Search {
        #[command(subcommand)]
        action: SearchCommands,
    },
    /// Notes on a company.
    Note {
        #[command(subcommand)]
        action: NoteCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides server.port)
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Clone, Debug, Args)]
pub struct EnrichArgs {
    /// Catalog id of the company
    pub company_id: String,

    /// Website to analyze (defaults to the company's website)
    #[arg(long)]
    pub url: Option<String>,

    /// Company name for the prompt (defaults to the catalog name)
    #[arg(long)]
    pub name: Option<String>,

    /// Enrich through a running server (e.g. http://localhost:3000)
    #[arg(long)]
    pub server: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CompaniesArgs {
    /// Case-insensitive text matched against name and description
    #[arg(long)]
    pub query: Option<String>,

    /// Sector filter ("All" for any)
    #[arg(long)]
    pub sector: Option<String>,

    /// Stage filter, e.g. "Series A", series-a, growth ("All" for any)
    #[arg(long)]
    pub stage: Option<String>,

    /// Sort field: name, sector, stage, location, founded-year,
    /// total-funding, last-funding-date
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Start from a discovery URL such as the one printed by `search run`;
    /// explicit flags override its parameters
    #[arg(long)]
    pub from: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct FindArgs {
    /// At least two characters, matched against name and sector
    pub term: String,

    /// Maximum number of hits
    #[arg(long, default_value_t = vantage_core::catalog::QUICK_SEARCH_LIMIT)]
    pub limit: usize,
}

#[derive(Clone, Debug, Args)]
pub struct ProfileArgs {
    /// Catalog id of the company
    pub company_id: String,
}
