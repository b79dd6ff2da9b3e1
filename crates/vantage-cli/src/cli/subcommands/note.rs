use clap::Subcommand;

/// Company note commands.
#[derive(Clone, Debug, Subcommand)]
pub enum NoteCommands {
    /// Add a note (newest notes come first).
    Add { company_id: String, text: String },
    /// Show all notes for a company.
    All { company_id: String },
}
