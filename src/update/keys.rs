//! Keystroke handling: resolve a key against the keymap and dispatch

use crate::keymap::{KeyAction, KeyContext, Keymap, Keystroke};
use crate::model::{AppModel, TransientMessage};

use super::update_table;

/// Feed one keystroke through the keymap
///
/// Returns the action taken so the host can handle unmatched keys itself
/// (a Tab outside any table is still a Tab).
pub fn update_keystroke(model: &mut AppModel, keymap: &mut Keymap, keystroke: Keystroke) -> KeyAction {
    let ctx = KeyContext::from_document(&model.document);
    let action = keymap.handle_keystroke_with_context(keystroke, Some(&ctx));
    match &action {
        KeyAction::AwaitMore => {
            if let Some(pending) = keymap.pending_chord_display() {
                model.status = Some(TransientMessage::info(format!("{} ...", pending)));
            }
        }
        KeyAction::Execute(command) => {
            if let Some(msg) = command.to_msg() {
                update_table(model, msg);
            }
        }
        KeyAction::NoMatch => {}
    }
    action
}
