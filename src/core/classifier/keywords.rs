//! Keyword lists (lower-case, substring match)

/// Signals that the answer depends on live data.
pub const WEB_SEARCH_KEYWORDS: &[&str] = &[
    "current",
    "latest",
    "recent",
    "today",
    "news",
    "weather",
    "stock",
    "price",
    "now",
    "happening",
    "update",
    "search",
    "this week",
    "this year",
    "2024",
    "2025",
    "2026",
];

pub const CREATIVE_KEYWORDS: &[&str] = &[
    "write",
    "create",
    "story",
    "poem",
    "imagine",
    "design",
    "compose",
    "brainstorm",
];

pub const ANALYTICAL_KEYWORDS: &[&str] = &[
    "analyze",
    "compare",
    "evaluate",
    "explain why",
    "pros and cons",
    "assess",
    "calculate",
];

pub const RESEARCH_KEYWORDS: &[&str] = &[
    "research",
    "study",
    "investigate",
    "sources",
    "evidence",
    "history of",
];

pub const HIGH_URGENCY_KEYWORDS: &[&str] = &["urgent", "asap"];

pub const MEDIUM_URGENCY_KEYWORDS: &[&str] = &["quick", "fast"];

/// Characters above which a query is complex
pub const COMPLEX_LENGTH: usize = 200;

/// Characters above which a query is medium
pub const MEDIUM_LENGTH: usize = 50;

pub(super) fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}
