//! pipegrid - structural editing for markdown pipe tables
//!
//! The `table` module is a pure engine over `&str` snapshots and byte
//! offsets. Everything else is the host around it: a rope-backed document,
//! Elm-style table messages, keybindings, a command palette registry,
//! configuration and logging.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod table;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use config::TableConfig;
pub use messages::TableMsg;
pub use model::AppModel;
pub use table::{TableEdit, TableInfo};
