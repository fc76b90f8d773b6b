//! Transient status messages shown after a table command

use std::time::{Duration, Instant};

/// How long a confirmation stays visible
pub const DEFAULT_MESSAGE_DURATION: Duration = Duration::from_secs(3);

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// The command ran
    Info,
    /// The command did not apply here
    Warning,
}

/// A transient status message that auto-expires
#[derive(Debug, Clone)]
pub struct TransientMessage {
    /// The message text
    pub text: String,
    pub kind: MessageKind,
    /// When this message expires
    pub expires_at: Instant,
}

impl TransientMessage {
    /// Create a new transient message with the given duration
    pub fn new(text: impl Into<String>, kind: MessageKind, duration: Duration) -> Self {
        Self {
            text: text.into(),
            kind,
            expires_at: Instant::now() + duration,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Info, DEFAULT_MESSAGE_DURATION)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, MessageKind::Warning, DEFAULT_MESSAGE_DURATION)
    }

    /// Check if this message has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_expires_immediately() {
        let msg = TransientMessage::new("gone", MessageKind::Info, Duration::ZERO);
        assert!(msg.is_expired());
    }

    #[test]
    fn test_default_duration_is_live() {
        let msg = TransientMessage::warning("Not in a table");
        assert!(!msg.is_expired());
        assert_eq!(msg.kind, MessageKind::Warning);
    }
}
