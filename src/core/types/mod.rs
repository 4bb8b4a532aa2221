//! Core type definition module
//!
//! Conversation messages in the chat-completion wire shape.

pub mod content;
pub mod message;

pub use content::{ContentPart, ImageUrl};
pub use message::{
    Message, MessageContent, MessageRole, assistant_message, latest_user_text, system_message,
    user_message,
};
