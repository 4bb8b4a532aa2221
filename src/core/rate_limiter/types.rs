//! Rate limiter types and data structures

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// User id applied when a caller passes none
pub const ANONYMOUS_USER: &str = "anonymous";

/// Rate limit result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitResult {
    /// Whether the request is allowed
    pub allowed: bool,
    /// Current request count in the window
    pub current_count: u32,
    /// Maximum requests allowed
    pub limit: u32,
    /// Remaining requests in the window
    pub remaining: u32,
    /// Time until the oldest request leaves the window (in seconds)
    pub reset_after_secs: u64,
    /// Retry after (in seconds, only set when not allowed)
    pub retry_after_secs: Option<u64>,
}

/// Usage of one `provider:user` window, for stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitUsage {
    pub used: u32,
    pub limit: u32,
    pub remaining: u32,
}

/// Rate limit entry for tracking request counts
#[derive(Debug, Clone, Default)]
pub(super) struct RateLimitEntry {
    /// Request timestamps for sliding window, oldest first
    pub(super) timestamps: Vec<Instant>,
}
