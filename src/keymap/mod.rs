//! Configurable keyboard mapping for table commands
//!
//! - Maps keystrokes to table commands
//! - Cmd on macOS, Ctrl elsewhere
//! - User overrides via YAML
//! - Multi-key chords
//!
//! # Architecture
//!
//! ```text
//! Keystroke + KeyContext → Keymap::handle_keystroke_with_context() → Command → TableMsg
//! ```
//!
//! Bindings carry `when` conditions so Tab only moves between cells while
//! the cursor is inside a table.
//!
//! ```ignore
//! let mut keymap = Keymap::with_bindings(load_default_keymap());
//! let action = keymap.handle_in_text(Keystroke::key(KeyCode::Tab), &text, cursor);
//! ```

mod binding;
mod command;
mod config;
mod context;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_sequence, parse_key_string, parse_keymap_yaml, KeymapError};
pub use context::{Condition, KeyContext};
pub use defaults::{
    default_bindings, get_default_keymap_yaml, load_default_keymap, merge_bindings,
};
pub use keymap::{KeyAction, Keymap};
pub use types::{KeyCode, Keystroke, Modifiers};
