//! Cache key and tag derivation

use crate::core::types::Message;
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;

/// Messages from the end of the conversation that make up a key
pub const KEY_WINDOW: usize = 3;

/// Tags whose answers go stale quickly
pub const VOLATILE_TAGS: &[&str] = &["news", "weather", "stock"];

/// Tags whose answers stay useful for hours
pub const PLANNING_TAGS: &[&str] = &["task", "planning", "reminder"];

/// Hex SHA-256 over role and content of the last [`KEY_WINDOW`] messages.
///
/// Timestamps never take part, so the same conversation tail always maps to
/// the same key.
pub fn cache_key(messages: &[Message]) -> String {
    let start = messages.len().saturating_sub(KEY_WINDOW);
    let mut hasher = Sha256::new();

    for message in &messages[start..] {
        hasher.update(message.role.to_string().as_bytes());
        hasher.update([0x1f]);
        let content = serde_json::to_string(&message.content).unwrap_or_else(|_| message.text());
        hasher.update(content.as_bytes());
        hasher.update([0x1e]);
    }

    hex::encode(hasher.finalize())
}

/// Tags derived from the latest message
pub fn extract_tags(messages: &[Message]) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();
    let Some(latest) = messages.last() else {
        return tags;
    };

    let text = latest.text().to_lowercase();
    let mut tag_if = |matched: bool, tag: &str| {
        if matched {
            tags.insert(tag.to_string());
        }
    };

    tag_if(text.contains("weather"), "weather");
    tag_if(text.contains("news"), "news");
    tag_if(text.contains("stock"), "stock");
    tag_if(text.contains("stock"), "finance");
    tag_if(text.contains("task") || text.contains("todo"), "task");
    tag_if(text.contains("schedule") || text.contains("plan"), "planning");
    tag_if(text.contains("remind"), "reminder");

    tags.insert(format!("role:{}", latest.role));
    tags
}

/// Whether any tag is in `group`
pub fn has_tag_in(tags: &BTreeSet<String>, group: &[&str]) -> bool {
    group.iter().any(|tag| tags.contains(*tag))
}
