//! Session-related types shared by the application layer and the terminal UI
//!
//! These are plain values: the UI renders them, the session owns the log they
//! live in.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a chat log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Synthesized summary of the bound character
    System,
    User,
    Assistant,
    /// A failed chat call
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MessageKind::System => "system",
            MessageKind::User => "user",
            MessageKind::Assistant => "assistant",
            MessageKind::Error => "error",
        };
        f.write_str(s)
    }
}

/// One entry of the chat log.
///
/// `timestamp` is advisory; log position is the only ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub kind: MessageKind,
    pub content: String,
    /// Replying character; only set on assistant entries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_label: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::unlabeled(MessageKind::System, content, timestamp)
    }

    pub fn user(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::unlabeled(MessageKind::User, content, timestamp)
    }

    pub fn assistant(
        content: impl Into<String>,
        character_label: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            kind: MessageKind::Assistant,
            content: content.into(),
            character_label: Some(character_label.into()),
            timestamp,
        }
    }

    pub fn error(content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::unlabeled(MessageKind::Error, content, timestamp)
    }

    fn unlabeled(kind: MessageKind, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind,
            content: content.into(),
            character_label: None,
            timestamp,
        }
    }
}

/// Lifecycle state of a conversation session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// No bound character
    Idle,
    /// Bound, nothing in flight
    Ready,
    /// Bound, exactly one chat call outstanding
    Pending,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::Idle => "idle",
            SessionState::Ready => "ready",
            SessionState::Pending => "pending",
        };
        f.write_str(s)
    }
}
