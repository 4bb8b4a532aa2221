//! Types for performance tracking

use crate::core::cache_manager::CacheMetadata;
use crate::core::providers::{ErrorKind, ProviderKind, ProviderReply};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::time::Duration;

/// Consolidated metrics storage - single lock for all metrics
#[derive(Debug, Default)]
pub(super) struct PerformanceStorage {
    /// Calls to `optimize_request`
    pub(super) total_requests: u64,
    /// Calls answered from the cache
    pub(super) cache_served: u64,
    /// Calls whose request function failed
    pub(super) failed_requests: u64,
    pub(super) providers: HashMap<ProviderKind, ProviderMetricsStorage>,
    pub(super) errors: HashMap<ErrorKind, u64>,
    pub(super) model_usage: HashMap<String, u64>,
}

/// Per-provider request metrics
#[derive(Debug, Default)]
pub(super) struct ProviderMetricsStorage {
    pub(super) requests: u64,
    pub(super) failures: u64,
    pub(super) durations_ms: VecDeque<f64>,
    pub(super) total_tokens: u64,
}

/// Options for [`PerformanceMonitor::optimize_request`](super::PerformanceMonitor::optimize_request)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Skip the cache lookup; the result is still written back
    pub bypass_cache: bool,
    /// TTL for the cached result, overriding tag-derived TTLs
    pub ttl: Option<Duration>,
    /// Model recorded in cache metadata when the value carries none
    pub model: Option<String>,
    /// Provider the request is expected to go to
    pub provider: Option<ProviderKind>,
}

/// Values that can be stored in the response cache
pub trait Cacheable: Serialize + DeserializeOwned {
    /// Metadata describing how the value was produced
    fn cache_metadata(&self) -> CacheMetadata {
        CacheMetadata::default()
    }
}

impl Cacheable for String {}

impl Cacheable for ProviderReply {
    fn cache_metadata(&self) -> CacheMetadata {
        CacheMetadata {
            model: Some(self.model.clone()),
            token_count: self.total_tokens,
            response_time_ms: None,
        }
    }
}

/// Per-provider view in a stats snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderPerformance {
    pub requests: u64,
    pub failures: u64,
    pub average_response_time_ms: f64,
    pub p95_response_time_ms: f64,
    pub total_tokens: u64,
}

/// Performance stats snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStats {
    pub total_requests: u64,
    pub cache_served: u64,
    pub failed_requests: u64,
    pub providers: BTreeMap<ProviderKind, ProviderPerformance>,
    pub errors_by_kind: BTreeMap<ErrorKind, u64>,
    pub model_usage: BTreeMap<String, u64>,
}
