//! Message log shown above the input box

use chrono::{DateTime, Local};

/// Outcome a message reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Domain blocked and cache flushed
    Blocked,
    /// Domain blocked but the cache flush failed
    Warning,
    /// Hosts table edit failed
    Error,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
    pub at: DateTime<Local>,
}

impl Message {
    pub fn blocked(domain: &str) -> Self {
        Self::now(MessageKind::Blocked, format!("✓ Blocked: {}", domain))
    }

    pub fn flush_warning(domain: &str, error: &impl std::fmt::Display) -> Self {
        Self::now(
            MessageKind::Warning,
            format!(
                "! Blocked {}, but the DNS cache was not flushed: {}",
                domain, error
            ),
        )
    }

    pub fn error(domain: &str, error: &impl std::fmt::Display) -> Self {
        Self::now(
            MessageKind::Error,
            format!("✗ Error blocking {}: {}", domain, error),
        )
    }

    fn now(kind: MessageKind, text: String) -> Self {
        Self {
            kind,
            text,
            at: Local::now(),
        }
    }

    /// Local `HH:MM:SS`
    pub fn timestamp(&self) -> String {
        self.at.format("%H:%M:%S").to_string()
    }
}

/// Messages in arrival order plus a scroll offset.
///
/// The offset counts messages hidden below the view, so 0 follows the
/// newest message.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
    offset: usize,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message and jump back to the newest one
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.offset = 0;
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Scroll towards older messages
    pub fn scroll_up(&mut self, lines: usize) {
        let max = self.messages.len().saturating_sub(1);
        self.offset = (self.offset + lines).min(max);
    }

    /// Scroll towards newer messages
    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    /// The messages that fit in `height` rows at the current offset
    pub fn visible(&self, height: usize) -> &[Message] {
        let end = self.messages.len().saturating_sub(self.offset);
        let start = end.saturating_sub(height);
        &self.messages[start..end]
    }
}
