use clap::Subcommand;

/// Company list commands. `<LIST>` is a list id or its exact name.
#[derive(Clone, Debug, Subcommand)]
pub enum ListCommands {
    /// Create an empty list.
    Create { name: String },
    /// Show all lists.
    All,
    /// Show one list with its companies.
    Show { list: String },
    /// Add companies to a list (duplicates are skipped).
    Add {
        list: String,
        #[arg(required = true)]
        company_ids: Vec<String>,
    },
    /// Remove a company from a list.
    Remove { list: String, company_id: String },
    /// Delete a list.
    Delete { list: String },
    /// Export a list's companies as CSV or JSON.
    Export {
        list: String,
        /// csv or json
        #[arg(long = "as", default_value = "csv")]
        export_as: String,
        /// Directory to write the export to
        #[arg(long, default_value = ".")]
        out_dir: String,
        /// Print the export instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
}
