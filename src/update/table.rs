//! Table command dispatch
//!
//! Handles TableMsg messages: locates the table fresh on every call, resolves
//! the cursor's cell, runs the matching navigation or mutation, and applies
//! the result to the document in one step.

use crate::config::TableConfig;
use crate::messages::TableMsg;
use crate::model::{AppModel, TransientMessage};
use crate::table::{
    add_column_after, column_at_offset, delete_row, find_cell_at_cursor, find_table_at_cursor,
    get_next_cell, get_previous_cell, insert_row, toggle_column_alignment, CellAddress,
    RowPlacement, TableEdit, TableInfo,
};

/// Result of planning a table command against a text snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOutcome {
    /// The document was rewritten; `edit.cursor_pos` is always set
    Edited { edit: TableEdit, message: String },
    /// Only the cursor moves (byte offset)
    Moved { cursor: usize },
    /// The command does not apply at this cursor
    NotApplicable(String),
}

impl TableOutcome {
    fn edited(edit: TableEdit, fallback_cursor: usize, message: impl Into<String>) -> Self {
        let cursor = edit.cursor_pos.unwrap_or(fallback_cursor);
        TableOutcome::Edited {
            edit: TableEdit::new(edit.text, cursor),
            message: message.into(),
        }
    }

    fn not_applicable(reason: impl Into<String>) -> Self {
        TableOutcome::NotApplicable(reason.into())
    }
}

/// Handle a table message against the model's document
///
/// Returns true if the document or cursor changed. Refusals leave the
/// document untouched and set a warning status instead.
pub fn update_table(model: &mut AppModel, msg: TableMsg) -> bool {
    let text = model.document.text();
    let cursor = model.document.cursor_byte_offset();

    match table_command(&text, cursor, &model.config, msg) {
        TableOutcome::Edited { edit, message } => {
            let cursor = edit.cursor_pos.unwrap_or(cursor);
            model.document.apply_table_edit(edit, cursor);
            model.status = Some(TransientMessage::info(message));
            true
        }
        TableOutcome::Moved { cursor } => {
            model.document.set_cursor_byte_offset(cursor);
            model.status = None;
            true
        }
        TableOutcome::NotApplicable(reason) => {
            model.status = Some(TransientMessage::warning(reason));
            false
        }
    }
}

/// Plan a table command on a text snapshot without applying it
pub fn table_command(
    text: &str,
    cursor: usize,
    config: &TableConfig,
    msg: TableMsg,
) -> TableOutcome {
    tracing::debug!(?msg, cursor, "table command");

    let Some(table) = find_table_at_cursor(text, cursor) else {
        return TableOutcome::not_applicable("Not in a table");
    };

    let outcome = match msg {
        TableMsg::NextCell => next_cell(text, &table, cursor, config),
        TableMsg::PrevCell => prev_cell(&table, cursor),
        TableMsg::InsertRowBelow => add_row(text, &table, cursor, config, RowPlacement::Below),
        TableMsg::InsertRowAbove => add_row(text, &table, cursor, config, RowPlacement::Above),
        TableMsg::InsertColumnAfter => add_column(text, &table, cursor),
        TableMsg::CycleAlignment => cycle_alignment(text, &table, cursor),
        TableMsg::DeleteRow => remove_row(text, &table, cursor, config),
    };

    if let TableOutcome::NotApplicable(reason) = &outcome {
        tracing::debug!(?msg, reason = reason.as_str(), "table command not applicable");
    }
    outcome
}

fn cell_at(table: &TableInfo, cursor: usize) -> Result<CellAddress, TableOutcome> {
    find_cell_at_cursor(table, cursor)
        .ok_or_else(|| TableOutcome::not_applicable("Cursor is not in a table row"))
}

/// Next cell, optionally growing the table from its last cell
fn next_cell(text: &str, table: &TableInfo, cursor: usize, config: &TableConfig) -> TableOutcome {
    let addr = match cell_at(table, cursor) {
        Ok(addr) => addr,
        Err(outcome) => return outcome,
    };

    if let Some(target) = get_next_cell(table, addr.row, addr.col) {
        return TableOutcome::Moved { cursor: target.pos };
    }

    let is_last_row = addr.row + 1 == table.rows.len();
    if config.tab_extends_table && is_last_row {
        let edit = insert_row(text, table, addr.row, RowPlacement::Below, config.row_fill);
        return TableOutcome::edited(edit, cursor, "Row added");
    }

    TableOutcome::not_applicable("Already at the last cell")
}

fn prev_cell(table: &TableInfo, cursor: usize) -> TableOutcome {
    let addr = match cell_at(table, cursor) {
        Ok(addr) => addr,
        Err(outcome) => return outcome,
    };

    match get_previous_cell(table, addr.row, addr.col) {
        Some(target) => TableOutcome::Moved { cursor: target.pos },
        None => TableOutcome::not_applicable("Already at the first cell"),
    }
}

fn add_row(
    text: &str,
    table: &TableInfo,
    cursor: usize,
    config: &TableConfig,
    placement: RowPlacement,
) -> TableOutcome {
    let addr = match cell_at(table, cursor) {
        Ok(addr) => addr,
        Err(outcome) => return outcome,
    };

    let edit = insert_row(text, table, addr.row, placement, config.row_fill);
    let message = match placement {
        RowPlacement::Below => "Row inserted below",
        RowPlacement::Above => "Row inserted above",
    };
    TableOutcome::edited(edit, cursor, message)
}

fn add_column(text: &str, table: &TableInfo, cursor: usize) -> TableOutcome {
    let addr = match cell_at(table, cursor) {
        Ok(addr) => addr,
        Err(outcome) => return outcome,
    };

    let before = text.len();
    let edit = add_column_after(text, table, addr.col);
    if edit.text.len() == before {
        return TableOutcome::not_applicable("No column to insert after");
    }
    TableOutcome::edited(edit, cursor, "Column inserted")
}

/// Cycle alignment of the cursor's column. The cursor may also sit on the
/// alignment line itself.
fn cycle_alignment(text: &str, table: &TableInfo, cursor: usize) -> TableOutcome {
    let Some(alignment_cells) = table.alignment_cells(text) else {
        return TableOutcome::not_applicable("Table has no alignment row");
    };

    let on_alignment_line = table
        .alignment_line_span(text)
        .is_some_and(|(start, end)| (start..=end).contains(&cursor));
    let col = match find_cell_at_cursor(table, cursor) {
        Some(addr) => addr.col,
        None if on_alignment_line => column_at_offset(&alignment_cells, cursor),
        None => return TableOutcome::not_applicable("Cursor is not in a table row"),
    };

    let Some(current) = table.column_alignments(text).get(col).copied() else {
        return TableOutcome::not_applicable("Column has no alignment marker");
    };

    let edit = toggle_column_alignment(text, table, col);
    let new_cursor = remap_cursor(text, &edit.text, cursor);
    let message = format!("Column {} aligned {}", col + 1, current.cycle().label());
    TableOutcome::edited(edit, new_cursor, message)
}

fn remove_row(
    text: &str,
    table: &TableInfo,
    cursor: usize,
    config: &TableConfig,
) -> TableOutcome {
    let addr = match cell_at(table, cursor) {
        Ok(addr) => addr,
        Err(outcome) => return outcome,
    };

    if table.rows.len() <= config.min_rows_for_delete {
        return TableOutcome::not_applicable(format!(
            "Cannot delete: table must keep more than {} rows",
            config.min_rows_for_delete
        ));
    }

    TableOutcome::edited(delete_row(text, table, addr.row), cursor, "Row deleted")
}

/// Carry a cursor across a single-site replacement: offsets after the first
/// differing byte shift by the length change, never landing before it.
fn remap_cursor(old: &str, new: &str, cursor: usize) -> usize {
    let Some(edit_at) = old
        .bytes()
        .zip(new.bytes())
        .position(|(a, b)| a != b)
        .or_else(|| (old.len() != new.len()).then(|| old.len().min(new.len())))
    else {
        return cursor;
    };

    if cursor <= edit_at {
        return cursor;
    }

    let shifted = if new.len() >= old.len() {
        cursor + (new.len() - old.len())
    } else {
        cursor.saturating_sub(old.len() - new.len())
    };
    shifted.max(edit_at).min(new.len())
}
