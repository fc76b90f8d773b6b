//! Message types for table commands
//!
//! Keybindings, the command palette and the CLI all funnel into these.

/// Table editing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableMsg {
    /// Move to the next cell (Tab)
    NextCell,
    /// Move to the previous cell (Shift+Tab)
    PrevCell,
    /// Insert an empty row below the cursor's row
    InsertRowBelow,
    /// Insert an empty row above the cursor's row
    InsertRowAbove,
    /// Insert an empty column after the cursor's column
    InsertColumnAfter,
    /// Cycle the cursor column's alignment: left, center, right
    CycleAlignment,
    /// Delete the cursor's row
    DeleteRow,
}

impl TableMsg {
    /// All messages, in menu order
    pub const ALL: [TableMsg; 7] = [
        TableMsg::NextCell,
        TableMsg::PrevCell,
        TableMsg::InsertRowBelow,
        TableMsg::InsertRowAbove,
        TableMsg::InsertColumnAfter,
        TableMsg::CycleAlignment,
        TableMsg::DeleteRow,
    ];

    /// Whether the message rewrites the document (as opposed to moving the cursor)
    pub fn is_edit(self) -> bool {
        !matches!(self, TableMsg::NextCell | TableMsg::PrevCell)
    }
}
