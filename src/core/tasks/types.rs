//! Task types

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Task priority; anything unrecognized reads as medium
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    /// Lenient parse: `high`, `HIGH`, `High priority` all read as high
    pub fn parse_lenient(value: &str) -> Self {
        let lower = value.trim().to_lowercase();
        if lower.starts_with("high") || lower == "urgent" {
            TaskPriority::High
        } else if lower.starts_with("low") {
            TaskPriority::Low
        } else {
            TaskPriority::Medium
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "low"),
            TaskPriority::Medium => write!(f, "medium"),
            TaskPriority::High => write!(f, "high"),
        }
    }
}

/// A task proposed by the assistant in its reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    /// Serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Serialized as `HH:MM`
    #[serde(with = "hhmm", default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    pub priority: TaskPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Optional times as 24-hour `HH:MM`
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(time) => serializer.serialize_str(&time.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|s| NaiveTime::parse_from_str(&s, "%H:%M").map_err(serde::de::Error::custom))
            .transpose()
    }
}
