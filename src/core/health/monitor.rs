//! Health monitor implementation
//!
//! Passive monitoring: providers are judged only by the outcomes of real
//! requests, never probed.

use super::types::{HealthMetric, HealthStatus, ProviderHealthReport};
use crate::config::HealthConfig;
use crate::core::providers::ProviderKind;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info};

/// Health monitor for tracking provider health
#[derive(Debug)]
pub struct HealthMonitor {
    config: HealthConfig,
    metrics: RwLock<HashMap<ProviderKind, HealthMetric>>,
}

impl Default for HealthMonitor {
    fn default() -> Self {
        Self::new(HealthConfig::default())
    }
}

impl HealthMonitor {
    /// Create a new health monitor
    pub fn new(config: HealthConfig) -> Self {
        Self {
            config,
            metrics: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &HealthConfig {
        &self.config
    }

    /// Record the outcome of one upstream call
    pub fn record_request(
        &self,
        provider: ProviderKind,
        response_time_ms: u64,
        success: bool,
        error: Option<&str>,
    ) {
        let mut metrics = self.metrics.write();
        let metric = metrics.entry(provider).or_default();

        metric.requests += 1;
        metric.total_response_time_ms = metric.total_response_time_ms.saturating_add(response_time_ms);

        if !success {
            metric.errors += 1;
            metric.last_error = Some(error.unwrap_or("unknown error").to_string());
            metric.last_error_at = Some(Instant::now());
            metric.last_error_time = Some(chrono::Utc::now());
            debug!(%provider, errors = metric.errors, "Recorded provider failure");
        }
    }

    /// Status of one provider
    pub fn provider_status(&self, provider: ProviderKind) -> HealthStatus {
        let metrics = self.metrics.read();
        match metrics.get(&provider) {
            Some(metric) => self.evaluate(metric, Instant::now()),
            None => HealthStatus::Healthy,
        }
    }

    /// Reports for every provider, sorted by provider name
    pub fn health_status(&self) -> Vec<ProviderHealthReport> {
        let metrics = self.metrics.read();
        let now = Instant::now();
        let empty = HealthMetric::default();

        let mut reports: Vec<ProviderHealthReport> = ProviderKind::ALL
            .iter()
            .map(|kind| {
                let metric = metrics.get(kind).unwrap_or(&empty);
                ProviderHealthReport {
                    provider: *kind,
                    status: self.evaluate(metric, now),
                    requests: metric.requests,
                    errors: metric.errors,
                    error_rate: metric.error_rate(),
                    avg_response_time_ms: metric.avg_response_time_ms(),
                    last_error: metric.last_error.clone(),
                    last_error_time: metric.last_error_time,
                }
            })
            .collect();

        reports.sort_by(|a, b| a.provider.as_str().cmp(b.provider.as_str()));
        reports
    }

    /// Status from counters, checked in order: idle, down, degraded, healthy
    fn evaluate(&self, metric: &HealthMetric, now: Instant) -> HealthStatus {
        if metric.requests == 0 {
            return HealthStatus::Healthy;
        }

        let error_rate = metric.error_rate();
        let recent_error = metric.last_error_at.is_some_and(|at| {
            now.saturating_duration_since(at) < self.config.recent_error_window()
        });

        if error_rate > self.config.down_error_rate
            || (error_rate > self.config.degraded_error_rate && recent_error)
        {
            HealthStatus::Down
        } else if error_rate > self.config.degraded_error_rate
            || metric.avg_response_time_ms() > self.config.slow_response_ms
        {
            HealthStatus::Degraded
        } else {
            HealthStatus::Healthy
        }
    }

    /// Forget all counters
    pub fn reset(&self) {
        self.metrics.write().clear();
        info!("Health metrics reset");
    }
}
