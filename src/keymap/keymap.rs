//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::context::{Condition, KeyContext};
use super::types::Keystroke;
use crate::messages::TableMsg;

/// Result of handling a keystroke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Execute this command
    Execute(Command),
    /// Keystroke is part of a chord, await more input
    AwaitMore,
    /// No binding matches; the host handles the key itself
    NoMatch,
}

impl KeyAction {
    /// The table message to dispatch, if this action executes one
    pub fn table_msg(&self) -> Option<TableMsg> {
        match self {
            KeyAction::Execute(command) => command.to_msg(),
            _ => None,
        }
    }
}

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Keybinding>,
    /// Single-keystroke bindings by keystroke (indices into `bindings`).
    /// One keystroke may carry several bindings with different conditions.
    single_lookup: HashMap<Keystroke, Vec<usize>>,
    /// Chord bindings by their first keystroke
    chord_prefixes: HashMap<Keystroke, Vec<usize>>,
    pending_chord: Vec<Keystroke>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding to the keymap
    pub fn add_binding(&mut self, binding: Keybinding) {
        let Some(&first) = binding.keystrokes.first() else {
            return;
        };
        let idx = self.bindings.len();
        let index = if binding.is_chord() {
            &mut self.chord_prefixes
        } else {
            &mut self.single_lookup
        };
        index.entry(first).or_default().push(idx);
        self.bindings.push(binding);
    }

    /// Clear pending chord state
    pub fn reset(&mut self) {
        self.pending_chord.clear();
    }

    /// Handle a keystroke without context; conditional bindings never match
    pub fn handle_keystroke(&mut self, keystroke: Keystroke) -> KeyAction {
        self.handle_keystroke_with_context(keystroke, None)
    }

    /// Handle a keystroke against the table context at `cursor` in `text`
    pub fn handle_in_text(&mut self, keystroke: Keystroke, text: &str, cursor: usize) -> KeyAction {
        let ctx = KeyContext::from_text(text, cursor);
        self.handle_keystroke_with_context(keystroke, Some(&ctx))
    }

    /// Handle a keystroke with context for conditional bindings
    ///
    /// Conditional bindings whose conditions hold win over unconditional ones.
    pub fn handle_keystroke_with_context(
        &mut self,
        keystroke: Keystroke,
        context: Option<&KeyContext>,
    ) -> KeyAction {
        if !self.pending_chord.is_empty() {
            self.pending_chord.push(keystroke);
            return self.try_complete_chord(context);
        }

        if let Some(command) = self
            .single_lookup
            .get(&keystroke)
            .and_then(|indices| self.find_matching(indices, &[keystroke], context))
        {
            return KeyAction::Execute(command);
        }

        if self.chord_prefixes.contains_key(&keystroke) {
            self.pending_chord.push(keystroke);
            return KeyAction::AwaitMore;
        }

        KeyAction::NoMatch
    }

    fn find_matching(
        &self,
        indices: &[usize],
        sequence: &[Keystroke],
        context: Option<&KeyContext>,
    ) -> Option<Command> {
        let candidates = || {
            indices
                .iter()
                .map(|&idx| &self.bindings[idx])
                .filter(move |b| b.keystrokes == sequence)
        };

        let conditional = candidates().find(|b| match (&b.when, context) {
            (Some(conditions), Some(ctx)) => Condition::evaluate_all(conditions, ctx),
            _ => false,
        });

        conditional
            .or_else(|| candidates().find(|b| b.when.is_none()))
            .map(|b| b.command)
    }

    fn try_complete_chord(&mut self, context: Option<&KeyContext>) -> KeyAction {
        let Some(indices) = self.chord_prefixes.get(&self.pending_chord[0]) else {
            self.reset();
            return KeyAction::NoMatch;
        };

        if let Some(command) = self.find_matching(indices, &self.pending_chord, context) {
            self.reset();
            return KeyAction::Execute(command);
        }

        let pending = self.pending_chord.len();
        let could_match = indices.iter().any(|&idx| {
            let strokes = &self.bindings[idx].keystrokes;
            strokes.len() > pending && strokes[..pending] == self.pending_chord[..]
        });

        if could_match {
            KeyAction::AwaitMore
        } else {
            self.reset();
            KeyAction::NoMatch
        }
    }

    /// Look up a single keystroke without chord handling.
    /// Returns the first unconditional binding that matches.
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup_with_context(keystroke, None)
    }

    pub fn lookup_with_context(
        &self,
        keystroke: &Keystroke,
        context: Option<&KeyContext>,
    ) -> Option<Command> {
        let indices = self.single_lookup.get(keystroke)?;
        self.find_matching(indices, std::slice::from_ref(keystroke), context)
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    /// Get the keybinding for a command (first match)
    pub fn binding_for(&self, command: Command) -> Option<&Keybinding> {
        self.bindings.iter().find(|b| b.command == command)
    }

    /// Get display string for a command's keybinding
    pub fn display_for(&self, command: Command) -> Option<String> {
        self.binding_for(command).map(|b| b.display_string())
    }

    pub fn has_pending_chord(&self) -> bool {
        !self.pending_chord.is_empty()
    }

    /// Pending chord keystrokes, for the status bar
    pub fn pending_chord_display(&self) -> Option<String> {
        if self.pending_chord.is_empty() {
            return None;
        }
        Some(
            self.pending_chord
                .iter()
                .map(|k| k.display_string())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}
