//! Provider request and reply types

use crate::core::types::Message;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The two upstream providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// General-purpose chat completion
    General,
    /// Web-search augmented chat completion
    Search,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [ProviderKind::General, ProviderKind::Search];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::General => "general",
            ProviderKind::Search => "search",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(ProviderKind::General),
            "search" => Ok(ProviderKind::Search),
            other => Err(format!("unknown provider '{}'", other)),
        }
    }
}

/// One chat-completion call
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Successful provider answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderReply {
    /// Reply text, citations included
    pub content: String,
    /// Model that produced the reply
    pub model: String,
    pub provider: ProviderKind,
    /// `usage.total_tokens`, when reported
    pub total_tokens: Option<u64>,
}

/// Content used when the upstream returns no message
pub const EMPTY_REPLY_PLACEHOLDER: &str = "No response received.";

/// Upstream chat-completion response body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub search_results: Vec<SearchResult>,
}

/// Some upstreams send `null` instead of omitting an empty list
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ChatCompletionResponse {
    /// `choices[0].message.content`, or the placeholder
    pub fn content(&self) -> String {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.clone())
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| EMPTY_REPLY_PLACEHOLDER.to_string())
    }

    pub fn total_tokens(&self) -> Option<u64> {
        self.usage.as_ref().and_then(|usage| usage.total_tokens)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub total_tokens: Option<u64>,
}

/// A web source returned by the search provider
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
