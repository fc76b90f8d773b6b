//! Command-line argument parsing for pipegrid
//!
//! ```text
//! pipegrid <COMMAND> <FILE> [--offset N | --line L [--column C]] [--write]
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::messages::TableMsg;
use crate::util::line_col_to_offset;

/// Structural editing for markdown pipe tables
#[derive(Parser, Debug)]
#[command(name = "pipegrid", version, about = "Structural editing for markdown pipe tables")]
pub struct CliArgs {
    /// What to do at the cursor
    #[arg(value_enum, value_name = "COMMAND")]
    pub action: Action,

    /// Markdown file to operate on
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Cursor as a byte offset into the file
    #[arg(long, value_name = "N", conflicts_with = "line")]
    pub offset: Option<usize>,

    /// Cursor line (1-indexed)
    #[arg(long, value_name = "L")]
    pub line: Option<usize>,

    /// Cursor column in characters (1-indexed, used with --line)
    #[arg(long, value_name = "C", requires = "line")]
    pub column: Option<usize>,

    /// Write the result back to FILE instead of printing it
    #[arg(short = 'w', long)]
    pub write: bool,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Table commands exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    NextCell,
    PrevCell,
    RowBelow,
    RowAbove,
    ColumnAfter,
    CycleAlignment,
    DeleteRow,
    /// Print the table at the cursor as JSON
    Inspect,
}

impl Action {
    /// The table message this action dispatches (`None` for `inspect`)
    pub fn table_msg(self) -> Option<TableMsg> {
        match self {
            Action::NextCell => Some(TableMsg::NextCell),
            Action::PrevCell => Some(TableMsg::PrevCell),
            Action::RowBelow => Some(TableMsg::InsertRowBelow),
            Action::RowAbove => Some(TableMsg::InsertRowAbove),
            Action::ColumnAfter => Some(TableMsg::InsertColumnAfter),
            Action::CycleAlignment => Some(TableMsg::CycleAlignment),
            Action::DeleteRow => Some(TableMsg::DeleteRow),
            Action::Inspect => None,
        }
    }
}

/// Where the cursor starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorSpec {
    /// Byte offset
    Offset(usize),
    /// 0-indexed line and char column
    LineColumn { line: usize, column: usize },
}

impl CursorSpec {
    /// Resolve to a byte offset into `text`
    pub fn resolve(self, text: &str) -> Result<usize, String> {
        match self {
            CursorSpec::Offset(offset) if offset > text.len() => Err(format!(
                "Offset {} is past the end of the file ({} bytes)",
                offset,
                text.len()
            )),
            CursorSpec::Offset(offset) if !text.is_char_boundary(offset) => Err(format!(
                "Offset {} is inside a multi-byte character",
                offset
            )),
            CursorSpec::Offset(offset) => Ok(offset),
            CursorSpec::LineColumn { line, column } => line_col_to_offset(text, line, column)
                .ok_or_else(|| format!("Line {} is past the end of the file", line + 1)),
        }
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub action: Action,
    pub file: PathBuf,
    pub cursor: CursorSpec,
    pub write: bool,
    pub config_path: Option<PathBuf>,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration
    pub fn into_config(self) -> Result<RunConfig, String> {
        if self.write && self.action == Action::Inspect {
            return Err("--write has no effect with inspect".to_string());
        }

        // Convert from 1-indexed (user input) to 0-indexed (internal)
        let cursor = match (self.offset, self.line) {
            (Some(offset), _) => CursorSpec::Offset(offset),
            (None, Some(line)) => CursorSpec::LineColumn {
                line: line.saturating_sub(1),
                column: self.column.unwrap_or(1).saturating_sub(1),
            },
            (None, None) => CursorSpec::Offset(0),
        };

        Ok(RunConfig {
            action: self.action,
            file: self.file,
            cursor,
            write: self.write,
            config_path: self.config,
        })
    }
}
