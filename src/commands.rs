//! Command palette registry
//!
//! Every table command with a label and a static keybinding hint, plus the
//! fuzzy filter the palette uses to narrow them down.

use crate::keymap::{Command as KeymapCommand, Keymap};
use crate::messages::TableMsg;

/// Identifies a command that can be executed via the command palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    NextCell,
    PreviousCell,
    InsertRowBelow,
    InsertRowAbove,
    InsertColumnAfter,
    CycleAlignment,
    DeleteRow,
}

/// A command definition for the command palette
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    pub label: &'static str,
    pub keybinding: Option<&'static str>,
}

/// Static registry of all available commands
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        id: CommandId::NextCell,
        label: "Table: Next Cell",
        keybinding: Some("Tab"),
    },
    CommandDef {
        id: CommandId::PreviousCell,
        label: "Table: Previous Cell",
        keybinding: Some("⇧Tab"),
    },
    CommandDef {
        id: CommandId::InsertRowBelow,
        label: "Table: Insert Row Below",
        keybinding: Some("⌘Enter"),
    },
    CommandDef {
        id: CommandId::InsertRowAbove,
        label: "Table: Insert Row Above",
        keybinding: Some("⇧⌘Enter"),
    },
    CommandDef {
        id: CommandId::InsertColumnAfter,
        label: "Table: Insert Column After",
        keybinding: Some("⇧⌘→"),
    },
    CommandDef {
        id: CommandId::CycleAlignment,
        label: "Table: Cycle Column Alignment",
        keybinding: Some("⌘K ⌘A"),
    },
    CommandDef {
        id: CommandId::DeleteRow,
        label: "Table: Delete Row",
        keybinding: Some("⇧⌘Backspace"),
    },
];

/// Score how well `query` fuzzy-matches `target` (higher is better)
///
/// Every query char must appear in order. Consecutive runs, word starts and
/// a match on the first char earn bonuses.
fn fuzzy_match_score(query: &str, target: &str) -> Option<i32> {
    let query_chars: Vec<char> = query.to_lowercase().chars().collect();
    if query_chars.is_empty() {
        return Some(0);
    }

    let mut query_idx = 0;
    let mut score = 0;
    let mut prev_matched = false;
    // Start of string counts as separator
    let mut prev_was_separator = true;

    for (i, tc) in target.to_lowercase().chars().enumerate() {
        let Some(&qc) = query_chars.get(query_idx) else {
            break;
        };

        if tc == qc {
            score += 1;
            if prev_matched {
                score += 2;
            }
            if prev_was_separator {
                score += 3;
            }
            if i == 0 {
                score += 5;
            }
            query_idx += 1;
            prev_matched = true;
        } else {
            prev_matched = false;
        }

        prev_was_separator = matches!(tc, ' ' | '_' | '-' | ':');
    }

    (query_idx == query_chars.len()).then_some(score)
}

/// Filter commands by a search query (fuzzy match on label), best first
pub fn filter_commands(query: &str) -> Vec<&'static CommandDef> {
    if query.is_empty() {
        return COMMANDS.iter().collect();
    }

    let mut matches: Vec<(&'static CommandDef, i32)> = COMMANDS
        .iter()
        .filter_map(|cmd| fuzzy_match_score(query, cmd.label).map(|score| (cmd, score)))
        .collect();

    // Stable sort keeps registry order among equal scores
    matches.sort_by(|a, b| b.1.cmp(&a.1));

    matches.into_iter().map(|(cmd, _)| cmd).collect()
}

impl CommandId {
    /// The message the palette dispatches for this command
    pub fn to_msg(self) -> TableMsg {
        match self {
            CommandId::NextCell => TableMsg::NextCell,
            CommandId::PreviousCell => TableMsg::PrevCell,
            CommandId::InsertRowBelow => TableMsg::InsertRowBelow,
            CommandId::InsertRowAbove => TableMsg::InsertRowAbove,
            CommandId::InsertColumnAfter => TableMsg::InsertColumnAfter,
            CommandId::CycleAlignment => TableMsg::CycleAlignment,
            CommandId::DeleteRow => TableMsg::DeleteRow,
        }
    }

    /// The keymap command bound to the same action
    pub fn to_keymap_command(self) -> KeymapCommand {
        match self {
            CommandId::NextCell => KeymapCommand::TableNextCell,
            CommandId::PreviousCell => KeymapCommand::TablePrevCell,
            CommandId::InsertRowBelow => KeymapCommand::TableInsertRowBelow,
            CommandId::InsertRowAbove => KeymapCommand::TableInsertRowAbove,
            CommandId::InsertColumnAfter => KeymapCommand::TableInsertColumnAfter,
            CommandId::CycleAlignment => KeymapCommand::TableCycleAlignment,
            CommandId::DeleteRow => KeymapCommand::TableDeleteRow,
        }
    }
}

/// Keybinding display string for a command from the live keymap
pub fn keybinding_for_command(id: CommandId, keymap: &Keymap) -> Option<String> {
    keymap.display_for(id.to_keymap_command())
}

/// Keybinding display string from the static registry (when no keymap is loaded)
pub fn keybinding_for_command_static(id: CommandId) -> Option<&'static str> {
    COMMANDS
        .iter()
        .find(|cmd| cmd.id == id)
        .and_then(|cmd| cmd.keybinding)
}
