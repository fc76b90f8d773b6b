//! Keybinding struct representing a mapping from keystroke(s) to command

use super::command::Command;
use super::context::Condition;
use super::types::Keystroke;

/// A single keybinding mapping one or more keystrokes to a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    /// The keystroke sequence (usually 1, sometimes 2 for chords)
    pub keystrokes: Vec<Keystroke>,
    /// The command to execute
    pub command: Command,
    /// Conditions that must be true for this binding to activate
    pub when: Option<Vec<Condition>>,
}

impl Keybinding {
    /// Create a single-keystroke binding
    pub fn new(keystroke: Keystroke, command: Command) -> Self {
        Self::chord(vec![keystroke], command)
    }

    /// Create a chord binding (multi-keystroke sequence)
    pub fn chord(keystrokes: Vec<Keystroke>, command: Command) -> Self {
        Self {
            keystrokes,
            command,
            when: None,
        }
    }

    /// Add conditions to this binding (builder pattern)
    pub fn when(mut self, conditions: Vec<Condition>) -> Self {
        self.when = Some(conditions);
        self
    }

    /// Check if this is a chord (multi-keystroke) binding
    pub fn is_chord(&self) -> bool {
        self.keystrokes.len() > 1
    }

    /// Get display string for this keybinding
    pub fn display_string(&self) -> String {
        self.keystrokes
            .iter()
            .map(|k| k.display_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
