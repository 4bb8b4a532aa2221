//! Health status types and reports

use crate::core::providers::ProviderKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Health status levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Provider is fully operational
    Healthy,
    /// Provider answers, but slowly or with some errors
    Degraded,
    /// Provider is failing
    Down,
}

impl HealthStatus {
    /// Check if the status allows requests
    pub fn allows_requests(&self) -> bool {
        matches!(self, HealthStatus::Healthy | HealthStatus::Degraded)
    }

    /// Get numeric score for routing (higher is better)
    pub fn score(&self) -> u32 {
        match self {
            HealthStatus::Healthy => 100,
            HealthStatus::Degraded => 70,
            HealthStatus::Down => 0,
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "healthy"),
            HealthStatus::Degraded => write!(f, "degraded"),
            HealthStatus::Down => write!(f, "down"),
        }
    }
}

/// Rolling counters for one provider
#[derive(Debug, Clone, Default)]
pub struct HealthMetric {
    pub requests: u64,
    pub errors: u64,
    pub total_response_time_ms: u64,
    pub last_error: Option<String>,
    /// Monotonic time of the last error, used for recency checks
    pub last_error_at: Option<Instant>,
    /// Wall-clock time of the last error, for reports
    pub last_error_time: Option<DateTime<Utc>>,
}

impl HealthMetric {
    pub fn error_rate(&self) -> f64 {
        if self.requests == 0 {
            0.0
        } else {
            self.errors as f64 / self.requests as f64
        }
    }

    pub fn avg_response_time_ms(&self) -> f64 {
        if self.requests == 0 {
            0.0
        } else {
            self.total_response_time_ms as f64 / self.requests as f64
        }
    }
}

/// Health of one provider at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderHealthReport {
    pub provider: ProviderKind,
    pub status: HealthStatus,
    pub requests: u64,
    pub errors: u64,
    pub error_rate: f64,
    pub avg_response_time_ms: f64,
    pub last_error: Option<String>,
    pub last_error_time: Option<DateTime<Utc>>,
}
