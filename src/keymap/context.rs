//! Context system for conditional keybindings
//!
//! Lets Tab move between cells inside a table and fall through to the host's
//! own Tab handling everywhere else.

use serde::Deserialize;

use crate::model::Document;
use crate::table::find_table_at_cursor;

/// Context extracted from the document for keybinding evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    /// Whether the cursor's line belongs to a table block
    pub in_table: bool,
    /// Whether that table declares an alignment row
    pub has_alignment_row: bool,
}

impl KeyContext {
    /// Derive the context from a text snapshot and a byte-offset cursor
    pub fn from_text(text: &str, cursor: usize) -> Self {
        match find_table_at_cursor(text, cursor) {
            Some(table) => Self {
                in_table: true,
                has_alignment_row: table.has_alignment_row(),
            },
            None => Self::default(),
        }
    }

    /// Derive the context at a document's cursor
    pub fn from_document(doc: &Document) -> Self {
        Self::from_text(&doc.text(), doc.cursor_byte_offset())
    }
}

/// Conditions that can be attached to keybindings
///
/// Multiple conditions on a binding are ANDed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Cursor is inside a table block
    InTable,
    /// Cursor is outside any table block
    NotInTable,
    /// The cursor's table has an alignment row
    HasAlignmentRow,
}

impl Condition {
    /// Evaluate this condition against the current context
    pub fn evaluate(self, ctx: &KeyContext) -> bool {
        match self {
            Condition::InTable => ctx.in_table,
            Condition::NotInTable => !ctx.in_table,
            Condition::HasAlignmentRow => ctx.has_alignment_row,
        }
    }

    /// Evaluate all conditions (AND logic)
    pub fn evaluate_all(conditions: &[Condition], ctx: &KeyContext) -> bool {
        conditions.iter().all(|c| c.evaluate(ctx))
    }
}
