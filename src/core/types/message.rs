//! Message types

use super::content::ContentPart;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message role enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System message
    System,
    /// User message
    User,
    /// Assistant message
    Assistant,
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// Message content (supports multimodal)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain text content
    Text(String),
    /// Ordered text and image parts
    Parts(Vec<ContentPart>),
}

impl MessageContent {
    /// Text of the content; image parts are skipped and text parts joined by a space
    pub fn text(&self) -> String {
        match self {
            MessageContent::Text(text) => text.clone(),
            MessageContent::Parts(parts) => parts
                .iter()
                .filter_map(ContentPart::as_text)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Prepend a block of text, keeping image parts where they are
    pub fn prepend_text(&mut self, prefix: &str) {
        match self {
            MessageContent::Text(text) => {
                *text = format!("{}\n\n{}", prefix, text);
            }
            MessageContent::Parts(parts) => {
                parts.insert(
                    0,
                    ContentPart::Text {
                        text: prefix.to_string(),
                    },
                );
            }
        }
    }
}

impl std::fmt::Display for MessageContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text())
    }
}

impl From<String> for MessageContent {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for MessageContent {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A chat message in conversation order.
///
/// The timestamp is local bookkeeping only: it is never sent upstream and
/// never takes part in cache keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Author role
    pub role: MessageRole,
    /// Message body
    pub content: MessageContent,
    /// When the message was created
    #[serde(skip_serializing, default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Message {
    /// Create a message without a timestamp
    pub fn new(role: MessageRole, content: impl Into<MessageContent>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: None,
        }
    }

    /// Attach a creation timestamp
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Plain text of the message
    pub fn text(&self) -> String {
        self.content.text()
    }
}

/// Create a system message
pub fn system_message(content: impl Into<MessageContent>) -> Message {
    Message::new(MessageRole::System, content)
}

/// Create a user message
pub fn user_message(content: impl Into<MessageContent>) -> Message {
    Message::new(MessageRole::User, content)
}

/// Create an assistant message
pub fn assistant_message(content: impl Into<MessageContent>) -> Message {
    Message::new(MessageRole::Assistant, content)
}

/// Text of the most recent user message, if any
pub fn latest_user_text(messages: &[Message]) -> Option<String> {
    messages
        .iter()
        .rev()
        .find(|m| m.role == MessageRole::User)
        .map(Message::text)
}
