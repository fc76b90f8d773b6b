//! Host-side model: the document being edited and its status line

pub mod document;
pub mod status_bar;

pub use document::Document;
pub use status_bar::{MessageKind, TransientMessage, DEFAULT_MESSAGE_DURATION};

use crate::config::TableConfig;

/// State the table dispatcher operates on
#[derive(Debug, Clone, Default)]
pub struct AppModel {
    pub document: Document,
    pub config: TableConfig,
    /// Confirmation or refusal from the last table command
    pub status: Option<TransientMessage>,
}

impl AppModel {
    pub fn new(document: Document, config: TableConfig) -> Self {
        Self {
            document,
            config,
            status: None,
        }
    }

    /// Current status text, if one is set and still live
    pub fn status_text(&self) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|msg| !msg.is_expired())
            .map(|msg| msg.text.as_str())
    }
}
