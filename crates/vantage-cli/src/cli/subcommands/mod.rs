mod list;
mod note;
mod search;

pub use list::ListCommands;
pub use note::NoteCommands;
pub use search::SearchCommands;
