//! Utility functions for rate limiter

use super::limiter::RateLimiter;
use super::types::RateLimitUsage;
use crate::core::providers::ProviderKind;
use std::collections::BTreeMap;
use std::time::Instant;

impl RateLimiter {
    /// Cleanup expired entries
    pub async fn cleanup(&self) {
        let now = Instant::now();
        let window = self.window;

        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| {
            entry
                .timestamps
                .retain(|&t| now.saturating_duration_since(t) < window);
            !entry.timestamps.is_empty()
        });
    }

    /// Usage per `provider:user` key, counting only requests inside the window
    pub async fn snapshot(&self) -> BTreeMap<String, RateLimitUsage> {
        let now = Instant::now();
        let entries = self.entries.read().await;

        entries
            .iter()
            .filter_map(|(key, entry)| {
                let provider = key.split(':').next()?.parse::<ProviderKind>().ok()?;
                let limit = self.limit(provider);
                let used = entry
                    .timestamps
                    .iter()
                    .filter(|&&t| now.saturating_duration_since(t) < self.window)
                    .count() as u32;
                Some((
                    key.clone(),
                    RateLimitUsage {
                        used,
                        limit,
                        remaining: limit.saturating_sub(used),
                    },
                ))
            })
            .filter(|(_, usage)| usage.used > 0)
            .collect()
    }
}
