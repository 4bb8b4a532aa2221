//! Assistant persona configuration

use serde::{Deserialize, Serialize};

/// Base system prompt sent with every conversation that has none
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful personal assistant. \
Answer clearly and concisely. When the user asks you to plan or schedule \
something, propose concrete tasks.";

/// Assistant persona configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// System prompt used when the conversation carries no system message
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            system_prompt: default_system_prompt(),
        }
    }
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}
