//! Rate limiting configuration

use super::*;
use crate::core::providers::ProviderKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Advisory rate limiting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Sliding window length in seconds
    #[serde(default = "default_rate_window")]
    pub window: u64,
    /// Requests per window for the general provider
    #[serde(default = "default_general_rpm")]
    pub general_rpm: u32,
    /// Requests per window for the search provider
    #[serde(default = "default_search_rpm")]
    pub search_rpm: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window: default_rate_window(),
            general_rpm: default_general_rpm(),
            search_rpm: default_search_rpm(),
        }
    }
}

impl RateLimitConfig {
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window)
    }

    /// Quota for a provider
    pub fn limit_for(&self, provider: ProviderKind) -> u32 {
        match provider {
            ProviderKind::General => self.general_rpm,
            ProviderKind::Search => self.search_rpm,
        }
    }
}
