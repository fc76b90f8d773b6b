//! Command enum representing every bindable table action
//!
//! Commands are the bridge between keybindings and table messages.

use std::str::FromStr;

use crate::messages::TableMsg;

/// All table commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move to the next cell
    TableNextCell,
    /// Move to the previous cell
    TablePrevCell,
    /// Insert a row below the cursor's row
    TableInsertRowBelow,
    /// Insert a row above the cursor's row
    TableInsertRowAbove,
    /// Insert a column after the cursor's column
    TableInsertColumnAfter,
    /// Cycle the cursor column's alignment
    TableCycleAlignment,
    /// Delete the cursor's row
    TableDeleteRow,
    /// Removes a default binding when used in a user keymap
    Unbound,
}

impl Command {
    /// The table message this command dispatches, if any
    pub fn to_msg(self) -> Option<TableMsg> {
        use Command::*;
        match self {
            TableNextCell => Some(TableMsg::NextCell),
            TablePrevCell => Some(TableMsg::PrevCell),
            TableInsertRowBelow => Some(TableMsg::InsertRowBelow),
            TableInsertRowAbove => Some(TableMsg::InsertRowAbove),
            TableInsertColumnAfter => Some(TableMsg::InsertColumnAfter),
            TableCycleAlignment => Some(TableMsg::CycleAlignment),
            TableDeleteRow => Some(TableMsg::DeleteRow),
            Unbound => None,
        }
    }

    /// Human-readable name for menus and the status bar
    pub fn display_name(self) -> &'static str {
        use Command::*;
        match self {
            TableNextCell => "Next Cell",
            TablePrevCell => "Previous Cell",
            TableInsertRowBelow => "Insert Row Below",
            TableInsertRowAbove => "Insert Row Above",
            TableInsertColumnAfter => "Insert Column After",
            TableCycleAlignment => "Cycle Column Alignment",
            TableDeleteRow => "Delete Row",
            Unbound => "Unbound",
        }
    }
}

// Parse from keymap YAML command names
impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TableNextCell" => Ok(Command::TableNextCell),
            "TablePrevCell" => Ok(Command::TablePrevCell),
            "TableInsertRowBelow" => Ok(Command::TableInsertRowBelow),
            "TableInsertRowAbove" => Ok(Command::TableInsertRowAbove),
            "TableInsertColumnAfter" => Ok(Command::TableInsertColumnAfter),
            "TableCycleAlignment" => Ok(Command::TableCycleAlignment),
            "TableDeleteRow" => Ok(Command::TableDeleteRow),
            "Unbound" => Ok(Command::Unbound),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_msg_has_a_command() {
        let commands = [
            Command::TableNextCell,
            Command::TablePrevCell,
            Command::TableInsertRowBelow,
            Command::TableInsertRowAbove,
            Command::TableInsertColumnAfter,
            Command::TableCycleAlignment,
            Command::TableDeleteRow,
        ];
        for msg in TableMsg::ALL {
            assert!(
                commands.iter().any(|c| c.to_msg() == Some(msg)),
                "no command for {:?}",
                msg
            );
        }
    }

    #[test]
    fn test_unbound_dispatches_nothing() {
        assert_eq!(Command::Unbound.to_msg(), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            Command::from_str("TableDeleteRow"),
            Ok(Command::TableDeleteRow)
        );
        assert_eq!(Command::from_str("SaveFile"), Err(()));
    }
}
