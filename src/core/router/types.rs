//! Router request options and stats types

use crate::core::cache_manager::CacheStats;
use crate::core::health::ProviderHealthReport;
use crate::core::providers::ProviderKind;
use crate::core::rate_limiter::RateLimitUsage;
use crate::monitoring::PerformanceStats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-call options for [`AiService::process_query`](super::AiService::process_query)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Skip the cache lookup; the reply is still cached
    pub bypass_cache: bool,
    /// Send to this provider instead of the classified one
    pub force_provider: Option<ProviderKind>,
}

impl QueryOptions {
    pub fn bypass_cache(mut self) -> Self {
        self.bypass_cache = true;
        self
    }

    pub fn with_provider(mut self, provider: ProviderKind) -> Self {
        self.force_provider = Some(provider);
        self
    }
}

/// Everything the service measures, in one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStats {
    pub performance: PerformanceStats,
    pub cache: CacheStats,
    pub health: Vec<ProviderHealthReport>,
    /// Usage per `provider:user` window
    pub rate_limits: BTreeMap<String, RateLimitUsage>,
}
