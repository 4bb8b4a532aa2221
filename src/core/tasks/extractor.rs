//! Parser for task blocks in assistant replies

use super::types::{Task, TaskPriority};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// `Label: value` lines, tolerating bullets, numbering and bold markers
static FIELD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:(?:[-*•]|\d+[.)])\s*)?\**\s*(task|date|time|priority|description)\s*\**\s*:\s*\**\s*(.*?)\s*\**\s*$",
    )
    .expect("Invalid task field regex")
});

const TIME_FORMATS: &[&str] = &["%H:%M", "%I:%M %p", "%I:%M%p"];

/// A block under construction
#[derive(Debug, Default)]
struct PendingTask {
    title: String,
    date: Option<String>,
    time: Option<String>,
    priority: Option<String>,
    description: Option<String>,
}

impl PendingTask {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }

    fn finish(self) -> Option<Task> {
        let title = self.title.trim();
        if title.is_empty() {
            debug!("Skipping task block without a title");
            return None;
        }

        let Some(date) = self.date.as_deref().and_then(parse_date) else {
            debug!(title, "Skipping task block without a valid date");
            return None;
        };

        Some(Task {
            title: title.to_string(),
            date,
            time: self.time.as_deref().and_then(parse_time),
            priority: self
                .priority
                .as_deref()
                .map(TaskPriority::parse_lenient)
                .unwrap_or_default(),
            description: self.description.filter(|d| !d.trim().is_empty()),
        })
    }
}

/// Stateless task block parser
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskExtractor;

impl TaskExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Parse every complete task block in `text`.
    ///
    /// A block starts at a `Task:` line and runs to the next one. Lines that
    /// are not recognised fields are ignored.
    pub fn extract(&self, text: &str) -> Vec<Task> {
        let mut tasks = Vec::new();
        let mut current: Option<PendingTask> = None;

        for line in text.lines() {
            let Some(captures) = FIELD_LINE.captures(line) else {
                continue;
            };
            let label = captures[1].to_lowercase();
            let value = captures[2].trim().to_string();

            if label == "task" {
                if let Some(task) = current.take().and_then(PendingTask::finish) {
                    tasks.push(task);
                }
                current = Some(PendingTask::new(&value));
                continue;
            }

            let Some(pending) = current.as_mut() else {
                continue;
            };
            match label.as_str() {
                "date" => pending.date = Some(value),
                "time" => pending.time = Some(value),
                "priority" => pending.priority = Some(value),
                "description" => pending.description = Some(value),
                _ => {}
            }
        }

        if let Some(task) = current.and_then(PendingTask::finish) {
            tasks.push(task);
        }

        debug!("Extracted {} task(s)", tasks.len());
        tasks
    }
}

/// Strict `YYYY-MM-DD`
fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// `HH:MM` or `h:mm AM/PM`
fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim().to_uppercase();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(&value, format).ok())
}
