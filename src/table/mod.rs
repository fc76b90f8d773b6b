//! Markdown table structural editing
//!
//! Treats a contiguous run of pipe-delimited lines as a grid and edits it in
//! place on the raw text:
//! - Locating the table block around a cursor
//! - Mapping cursor offsets to (row, col) and moving between cells
//! - Inserting rows and columns, cycling column alignment, deleting rows
//!
//! # Architecture
//!
//! There is no persistent table model. Every command re-locates the table in
//! the current snapshot and every edit returns a whole new document:
//!
//! ```text
//! (text, cursor)
//! └── find_table_at_cursor → TableInfo
//!     ├── find_cell_at_cursor → CellAddress
//!     │   └── get_next_cell / get_previous_cell → CellTarget
//!     └── add_row_* / add_column_after / toggle_column_alignment / delete_row
//!         └── TableEdit { text, cursor_pos }
//! ```

mod classify;
mod locator;
mod model;
mod mutate;
mod navigation;
mod parser;

pub use classify::{is_alignment_row, is_in_table, is_table_row};
pub use locator::find_table_at_cursor;
pub use model::{
    Alignment, CellAddress, CellTarget, RowFill, RowPlacement, TableCell, TableEdit, TableInfo,
    TableRow,
};
pub use mutate::{
    add_column_after, add_row_above, add_row_below, delete_row, insert_row,
    toggle_column_alignment,
};
pub use navigation::{column_at_offset, find_cell_at_cursor, get_next_cell, get_previous_cell};
pub use parser::parse_table_row;
