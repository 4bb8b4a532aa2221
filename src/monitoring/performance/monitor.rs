//! Performance monitor implementation

use super::bounded::{BoundedPush, MAX_DURATION_SAMPLES, calculate_average, calculate_percentile};
use super::types::{
    Cacheable, PerformanceStats, PerformanceStorage, ProviderPerformance, RequestOptions,
};
use crate::core::cache_manager::ResponseCache;
use crate::core::providers::{ErrorKind, ProviderKind};
use crate::core::types::Message;
use parking_lot::RwLock;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Tracks request timings, tokens, errors and model usage, and fronts the
/// response cache for whole requests
#[derive(Debug)]
pub struct PerformanceMonitor {
    cache: Arc<ResponseCache>,
    /// All metrics storage consolidated into a single lock
    storage: RwLock<PerformanceStorage>,
}

impl PerformanceMonitor {
    pub fn new(cache: Arc<ResponseCache>) -> Self {
        Self {
            cache,
            storage: RwLock::new(PerformanceStorage::default()),
        }
    }

    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    /// Serve a request from the cache or run it and cache the result.
    ///
    /// A cached value is deserialized and returned without calling
    /// `make_request`. Errors from `make_request` are counted and returned
    /// unchanged; nothing is retried here.
    pub async fn optimize_request<T, E, F, Fut>(
        &self,
        messages: &[Message],
        make_request: F,
        options: RequestOptions,
    ) -> Result<T, E>
    where
        T: Cacheable,
        E: std::fmt::Display,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.storage.write().total_requests += 1;

        if !options.bypass_cache {
            if let Some(cached) = self.cache.get(messages) {
                match serde_json::from_str::<T>(&cached) {
                    Ok(value) => {
                        self.storage.write().cache_served += 1;
                        debug!("Request served from cache");
                        return Ok(value);
                    }
                    Err(e) => warn!("Ignoring undecodable cache entry: {}", e),
                }
            }
        }

        let started = Instant::now();
        let value = match make_request().await {
            Ok(value) => value,
            Err(e) => {
                self.storage.write().failed_requests += 1;
                debug!(
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Request failed: {}", e
                );
                return Err(e);
            }
        };

        let mut metadata = value.cache_metadata();
        if metadata.model.is_none() {
            metadata.model = options.model.clone();
        }
        metadata.response_time_ms = Some(started.elapsed().as_millis() as u64);

        match serde_json::to_string(&value) {
            Ok(serialized) => self.cache.set(messages, serialized, options.ttl, Some(metadata)),
            Err(e) => warn!("Response not cached, serialization failed: {}", e),
        }

        Ok(value)
    }

    /// Time a provider call and record its outcome
    pub async fn track_request<R, E, Fut>(
        &self,
        provider: ProviderKind,
        model: &str,
        request: Fut,
    ) -> Result<R, E>
    where
        Fut: Future<Output = Result<R, E>>,
    {
        let started = Instant::now();
        let result = request.await;
        self.record_request(provider, model, started.elapsed(), result.is_ok());
        result
    }

    /// Record one provider call
    pub fn record_request(
        &self,
        provider: ProviderKind,
        model: &str,
        duration: Duration,
        success: bool,
    ) {
        let mut storage = self.storage.write();
        let metrics = storage.providers.entry(provider).or_default();
        metrics.requests += 1;
        if !success {
            metrics.failures += 1;
        }
        metrics
            .durations_ms
            .push_bounded(duration.as_secs_f64() * 1000.0, MAX_DURATION_SAMPLES);

        *storage.model_usage.entry(model.to_string()).or_insert(0) += 1;
    }

    pub fn record_tokens(&self, provider: ProviderKind, tokens: u64) {
        self.storage
            .write()
            .providers
            .entry(provider)
            .or_default()
            .total_tokens += tokens;
    }

    pub fn record_error(&self, provider: ProviderKind, kind: ErrorKind) {
        debug!(%provider, %kind, "Recording provider error");
        *self.storage.write().errors.entry(kind).or_insert(0) += 1;
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> PerformanceStats {
        let storage = self.storage.read();

        let providers = storage
            .providers
            .iter()
            .map(|(kind, metrics)| {
                let mut sorted: Vec<f64> = metrics
                    .durations_ms
                    .iter()
                    .filter(|t| t.is_finite())
                    .copied()
                    .collect();
                sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

                (
                    *kind,
                    ProviderPerformance {
                        requests: metrics.requests,
                        failures: metrics.failures,
                        average_response_time_ms: calculate_average(&metrics.durations_ms),
                        p95_response_time_ms: calculate_percentile(&sorted, 0.95),
                        total_tokens: metrics.total_tokens,
                    },
                )
            })
            .collect();

        PerformanceStats {
            total_requests: storage.total_requests,
            cache_served: storage.cache_served,
            failed_requests: storage.failed_requests,
            providers,
            errors_by_kind: storage.errors.iter().map(|(k, v)| (*k, *v)).collect(),
            model_usage: storage
                .model_usage
                .iter()
                .map(|(k, v)| (k.clone(), *v))
                .collect(),
        }
    }

    /// Reset every counter; cached responses stay
    pub fn clear(&self) {
        *self.storage.write() = PerformanceStorage::default();
        debug!("Performance metrics cleared");
    }
}
