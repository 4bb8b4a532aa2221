//! Task extraction from assistant replies.
//!
//! The assistant is told to propose tasks as `Task:` / `Date:` / `Time:` /
//! `Priority:` / `Description:` blocks; this module turns them into values.

mod extractor;
mod types;

pub use extractor::TaskExtractor;
pub use types::{Task, TaskPriority};

/// Extract tasks with the default extractor
pub fn extract_tasks(text: &str) -> Vec<Task> {
    TaskExtractor::new().extract(text)
}
