//! System context injected ahead of every upstream call

use super::selection::ReasoningHint;
use crate::core::classifier::QueryClassification;
use crate::core::types::{Message, MessageRole, system_message};
use chrono::{DateTime, FixedOffset};

/// Block describing "now", the query and the task convention
pub fn system_context(
    classification: &QueryClassification,
    reasoning_hint: ReasoningHint,
    now: DateTime<FixedOffset>,
) -> String {
    format!(
        "Current date: {}\n\
         Current time: {} (UTC{})\n\
         ISO date: {}\n\
         Query: {}\n\
         Response style: {}\n\
         When proposing tasks, write one block per task:\n\
         Task: <title>\n\
         Date: YYYY-MM-DD\n\
         Time: HH:MM (optional)\n\
         Priority: low | medium | high\n\
         Description: <details> (optional)",
        now.format("%A, %B %-d, %Y"),
        now.format("%H:%M"),
        now.format("%:z"),
        now.format("%Y-%m-%d"),
        classification.summary(),
        reasoning_hint,
    )
}

/// Copy of `messages` with `context` prepended to the first system message,
/// or a new leading system message built from `system_prompt` and `context`
pub fn with_system_context(messages: &[Message], system_prompt: &str, context: &str) -> Vec<Message> {
    let mut prepared = messages.to_vec();

    match prepared.iter_mut().find(|m| m.role == MessageRole::System) {
        Some(system) => system.content.prepend_text(context),
        None => prepared.insert(0, system_message(format!("{}\n\n{}", system_prompt, context))),
    }

    prepared
}
