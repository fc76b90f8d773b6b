//! Update functions
//!
//! All document changes made by table commands flow through here, whether
//! they come from a keystroke, the command palette or the CLI.

mod keys;
mod table;

pub use keys::update_keystroke;
pub use table::{table_command, update_table, TableOutcome};
