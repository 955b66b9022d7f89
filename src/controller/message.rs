use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Warning,
    Success,
}

impl MessageKind {
    /// Background of the status line for this kind of message.
    pub fn background(self) -> &'static str {
        match self {
            MessageKind::Warning => "coral",
            MessageKind::Success => "#8ce854",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
    pub shown_at: DateTime<Utc>,
}

/// The single status line of a screen. Only the latest message is kept.
#[derive(Debug, Clone, Default)]
pub struct MessageField {
    current: Option<StatusMessage>,
}

impl MessageField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_warning(&mut self, text: impl Into<String>) {
        self.show(MessageKind::Warning, text.into());
    }

    pub fn show_success(&mut self, text: impl Into<String>) {
        self.show(MessageKind::Success, text.into());
    }

    fn show(&mut self, kind: MessageKind, text: String) {
        match kind {
            MessageKind::Warning => tracing::warn!("{}", text),
            MessageKind::Success => tracing::info!("{}", text),
        }
        self.current = Some(StatusMessage {
            kind,
            text,
            shown_at: Utc::now(),
        });
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|m| m.text.as_str())
    }

    pub fn kind(&self) -> Option<MessageKind> {
        self.current.as_ref().map(|m| m.kind)
    }
}
