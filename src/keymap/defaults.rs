//! Default keybindings for table editing
//!
//! Loaded from the keymap.yaml embedded at build time, falling back to the
//! hardcoded table below if that ever fails to parse.

use std::path::Path;

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::context::Condition;
use super::types::{KeyCode, Keystroke, Modifiers};
use crate::config_paths;

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// The embedded default keymap, for `pipegrid keymap --dump` style tooling
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: defaults + overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap
/// 2. keymap.yaml in the current directory
/// 3. User keymap from [`config_paths::keymap_file`]
pub fn load_default_keymap() -> Vec<Keybinding> {
    let mut bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::info!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    if let Ok(local) = load_keymap_file(Path::new("keymap.yaml")) {
        tracing::info!("Merging project keymap.yaml ({} bindings)", local.len());
        bindings = merge_bindings(bindings, local);
    }

    if let Some(user_path) = config_paths::keymap_file().filter(|p| p.exists()) {
        match load_keymap_file(&user_path) {
            Ok(user) => {
                tracing::info!(
                    "Merging user keymap from {} ({} bindings)",
                    user_path.display(),
                    user.len()
                );
                bindings = merge_bindings(bindings, user);
            }
            Err(e) => {
                tracing::warn!("Failed to load user keymap from {}: {}", user_path.display(), e);
            }
        }
    }

    bindings
}

/// Merge override bindings into base bindings
///
/// - Same keystrokes and conditions: the override replaces the base binding
/// - `Unbound`: every base binding on those keystrokes is removed
/// - Anything else is appended
pub fn merge_bindings(base: Vec<Keybinding>, overrides: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for binding in overrides {
        if binding.command == Command::Unbound {
            result.retain(|b| b.keystrokes != binding.keystrokes);
            continue;
        }

        match result
            .iter()
            .position(|b| b.keystrokes == binding.keystrokes && b.when == binding.when)
        {
            Some(idx) => result[idx] = binding,
            None => result.push(binding),
        }
    }

    result
}

/// Hardcoded table bindings for the current platform
///
/// Mirrors keymap.yaml. Uses Cmd on macOS, Ctrl elsewhere.
pub fn default_bindings() -> Vec<Keybinding> {
    let cmd = Modifiers::cmd();
    let cmd_shift = cmd | Modifiers::SHIFT;
    let in_table = || vec![Condition::InTable];

    vec![
        bind(KeyCode::Tab, Modifiers::NONE, Command::TableNextCell).when(in_table()),
        bind(KeyCode::Tab, Modifiers::SHIFT, Command::TablePrevCell).when(in_table()),
        bind(KeyCode::Enter, cmd, Command::TableInsertRowBelow).when(in_table()),
        bind(KeyCode::Enter, cmd_shift, Command::TableInsertRowAbove).when(in_table()),
        bind(KeyCode::Right, cmd_shift, Command::TableInsertColumnAfter).when(in_table()),
        Keybinding::chord(
            vec![
                Keystroke::char_with_mods('k', cmd),
                Keystroke::char_with_mods('a', cmd),
            ],
            Command::TableCycleAlignment,
        )
        .when(vec![Condition::InTable, Condition::HasAlignmentRow]),
        bind(KeyCode::Backspace, cmd_shift, Command::TableDeleteRow).when(in_table()),
    ]
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
