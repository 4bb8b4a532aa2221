//! Classification result types

use serde::{Deserialize, Serialize};

/// Kind of query, used to pick a model configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QueryType {
    #[default]
    General,
    Creative,
    Analytical,
    Research,
    News,
}

impl QueryType {
    pub const ALL: [QueryType; 5] = [
        QueryType::General,
        QueryType::Creative,
        QueryType::Analytical,
        QueryType::Research,
        QueryType::News,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::General => "general",
            QueryType::Creative => "creative",
            QueryType::Analytical => "analytical",
            QueryType::Research => "research",
            QueryType::News => "news",
        }
    }
}

impl std::fmt::Display for QueryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length-based complexity estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    #[default]
    Simple,
    Medium,
    Complex,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Complexity::Simple => write!(f, "simple"),
            Complexity::Medium => write!(f, "medium"),
            Complexity::Complex => write!(f, "complex"),
        }
    }
}

/// Keyword-based urgency estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Urgency::Low => write!(f, "low"),
            Urgency::Medium => write!(f, "medium"),
            Urgency::High => write!(f, "high"),
        }
    }
}

/// Per-request classification of the latest user message. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QueryClassification {
    /// Whether the answer needs live web data
    pub needs_web_search: bool,
    pub query_type: QueryType,
    pub complexity: Complexity,
    pub urgency: Urgency,
}

impl QueryClassification {
    /// One-line summary embedded in the system context
    pub fn summary(&self) -> String {
        format!(
            "type={}, complexity={}, urgency={}, web_search={}",
            self.query_type, self.complexity, self.urgency, self.needs_web_search
        )
    }
}
