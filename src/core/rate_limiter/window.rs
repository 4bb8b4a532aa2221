//! Sliding window implementation

use super::limiter::RateLimiter;
use super::types::RateLimitResult;
use std::time::Instant;
use tracing::debug;

impl RateLimiter {
    /// Sliding window rate limiting implementation
    /// If `record` is true, atomically records the request if allowed
    pub(super) async fn check_sliding_window_impl(
        &self,
        key: &str,
        limit: u32,
        record: bool,
    ) -> RateLimitResult {
        let now = Instant::now();

        let mut entries = self.entries.write().await;
        // Avoid String allocation if key already exists
        let entry = if let Some(e) = entries.get_mut(key) {
            e
        } else {
            entries.entry(key.to_string()).or_default()
        };

        // Remove expired timestamps
        entry
            .timestamps
            .retain(|&t| now.saturating_duration_since(t) < self.window);

        let current_count = entry.timestamps.len() as u32;
        let allowed = current_count < limit;
        let remaining = limit.saturating_sub(current_count);

        // Time until oldest request expires
        let reset_after_secs = match entry.timestamps.first() {
            Some(&oldest) => self
                .window
                .saturating_sub(now.saturating_duration_since(oldest))
                .as_secs(),
            None => self.window.as_secs(),
        };

        let retry_after_secs = if !allowed {
            Some(reset_after_secs.max(1))
        } else {
            if record {
                entry.timestamps.push(now);
            }
            None
        };

        if !allowed {
            debug!(
                "Rate limit exceeded for {}: {}/{} requests",
                key, current_count, limit
            );
        }

        RateLimitResult {
            allowed,
            current_count: if record && allowed {
                current_count + 1
            } else {
                current_count
            },
            limit,
            remaining: if record && allowed {
                remaining.saturating_sub(1)
            } else {
                remaining
            },
            reset_after_secs,
            retry_after_secs,
        }
    }
}
