//! Core rate limiter implementation

use super::types::{ANONYMOUS_USER, RateLimitEntry, RateLimitResult};
use crate::config::RateLimitConfig;
use crate::core::providers::ProviderKind;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Sliding-window rate limiter keyed by `provider:user`.
///
/// Advisory: callers ask before sending; nothing in the request path
/// enforces it.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    /// Rate limit configuration
    pub(super) config: RateLimitConfig,
    /// Rate limit entries by `provider:user`
    pub(super) entries: Arc<RwLock<HashMap<String, RateLimitEntry>>>,
    /// Window duration
    pub(super) window: Duration,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new(config: RateLimitConfig) -> Self {
        let window = config.window();
        Self::with_window(config, window)
    }

    /// Create a rate limiter with custom window
    pub fn with_window(config: RateLimitConfig, window: Duration) -> Self {
        Self {
            config,
            entries: Arc::new(RwLock::new(HashMap::new())),
            window,
        }
    }

    /// Check if a request should be allowed (read-only, does not record)
    pub async fn check(&self, provider: ProviderKind, user_id: Option<&str>) -> RateLimitResult {
        self.check_sliding_window_impl(&rate_key(provider, user_id), self.limit(provider), false)
            .await
    }

    /// Atomically check and record a request
    pub async fn check_and_record(
        &self,
        provider: ProviderKind,
        user_id: Option<&str>,
    ) -> RateLimitResult {
        self.check_sliding_window_impl(&rate_key(provider, user_id), self.limit(provider), true)
            .await
    }

    /// Record the request and return true if the window has room; otherwise
    /// return false without recording
    pub async fn can_make_request(&self, provider: ProviderKind, user_id: Option<&str>) -> bool {
        self.check_and_record(provider, user_id).await.allowed
    }

    /// Requests left in the current window
    pub async fn remaining_requests(&self, provider: ProviderKind, user_id: Option<&str>) -> u32 {
        self.check(provider, user_id).await.remaining
    }

    /// Time until the oldest recorded request leaves the window; zero when
    /// nothing is recorded
    pub async fn reset_time(&self, provider: ProviderKind, user_id: Option<&str>) -> Duration {
        let key = rate_key(provider, user_id);
        let entries = self.entries.read().await;
        entries
            .get(&key)
            .and_then(|entry| entry.timestamps.first())
            .map(|oldest| self.window.saturating_sub(oldest.elapsed()))
            .unwrap_or(Duration::ZERO)
    }

    /// Forget every recorded request
    pub async fn reset(&self) {
        self.entries.write().await.clear();
    }

    /// Get the configured limit for a provider
    pub fn limit(&self, provider: ProviderKind) -> u32 {
        self.config.limit_for(provider)
    }

    pub fn window(&self) -> Duration {
        self.window
    }
}

/// `provider:user`, with [`ANONYMOUS_USER`] standing in for a missing user
pub fn rate_key(provider: ProviderKind, user_id: Option<&str>) -> String {
    let user = user_id
        .map(str::trim)
        .filter(|user| !user.is_empty())
        .unwrap_or(ANONYMOUS_USER);
    format!("{}:{}", provider, user)
}
