//! Configuration data models
//!
//! This module defines all configuration structures used throughout the relay.

pub mod assistant;
pub mod cache;
pub mod health;
pub mod logging;
pub mod provider;
pub mod rate_limit;
pub mod router;

// Re-export all configuration types
pub use assistant::*;
pub use cache::*;
pub use health::*;
pub use logging::*;
pub use provider::*;
pub use rate_limit::*;
pub use router::*;

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

pub fn default_true() -> bool {
    true
}

/// Default cache TTL in seconds
pub fn default_cache_ttl() -> u64 {
    300 // 5 minutes
}

/// TTL for fast-changing topics (news, weather, stocks)
pub fn default_volatile_ttl() -> u64 {
    1800 // 30 minutes
}

/// TTL for task, planning and reminder answers
pub fn default_planning_ttl() -> u64 {
    7200 // 2 hours
}

pub fn default_cache_max_entries() -> usize {
    100
}

pub fn default_similarity_threshold() -> f64 {
    0.7
}

pub fn default_rate_window() -> u64 {
    60
}

pub fn default_general_rpm() -> u32 {
    200
}

pub fn default_search_rpm() -> u32 {
    100
}

pub fn default_down_error_rate() -> f64 {
    0.5
}

pub fn default_degraded_error_rate() -> f64 {
    0.1
}

pub fn default_slow_response_ms() -> f64 {
    10_000.0
}

/// Window in seconds during which an error counts as recent
pub fn default_recent_error_window() -> u64 {
    300
}

pub fn default_max_fallbacks() -> usize {
    1
}

pub fn default_max_model_attempts() -> usize {
    1
}

pub fn default_log_level() -> String {
    "info".to_string()
}
