//! Heuristic query classification.
//!
//! Classifies the latest user message by keyword membership and length.
//! Pure: no network, no state, never fails.

mod keywords;
mod types;

pub use keywords::{
    ANALYTICAL_KEYWORDS, CREATIVE_KEYWORDS, RESEARCH_KEYWORDS, WEB_SEARCH_KEYWORDS,
};
pub use types::{Complexity, QueryClassification, QueryType, Urgency};

use keywords::{
    COMPLEX_LENGTH, HIGH_URGENCY_KEYWORDS, MEDIUM_LENGTH, MEDIUM_URGENCY_KEYWORDS, contains_any,
};

/// Keyword and length based query classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryClassifier;

impl QueryClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a message.
    ///
    /// `query_type` resolution order is creative, analytical, research, then
    /// news when a web-search keyword matched, else general. `needs_web_search`
    /// is decided independently of the type.
    pub fn classify(&self, text: &str) -> QueryClassification {
        let lower = text.to_lowercase();

        let needs_web_search = contains_any(&lower, WEB_SEARCH_KEYWORDS);

        let query_type = if contains_any(&lower, CREATIVE_KEYWORDS) {
            QueryType::Creative
        } else if contains_any(&lower, ANALYTICAL_KEYWORDS) {
            QueryType::Analytical
        } else if contains_any(&lower, RESEARCH_KEYWORDS) {
            QueryType::Research
        } else if needs_web_search {
            QueryType::News
        } else {
            QueryType::General
        };

        QueryClassification {
            needs_web_search,
            query_type,
            complexity: Self::complexity(text),
            urgency: Self::urgency(&lower),
        }
    }

    fn complexity(text: &str) -> Complexity {
        let length = text.chars().count();
        if length > COMPLEX_LENGTH {
            Complexity::Complex
        } else if length > MEDIUM_LENGTH {
            Complexity::Medium
        } else {
            Complexity::Simple
        }
    }

    fn urgency(lower: &str) -> Urgency {
        if contains_any(lower, HIGH_URGENCY_KEYWORDS) {
            Urgency::High
        } else if contains_any(lower, MEDIUM_URGENCY_KEYWORDS) {
            Urgency::Medium
        } else {
            Urgency::Low
        }
    }
}

/// Classify with the default classifier
pub fn classify(text: &str) -> QueryClassification {
    QueryClassifier::new().classify(text)
}
