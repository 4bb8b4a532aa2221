//! Health monitoring configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Thresholds for provider health status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthConfig {
    /// Error rate above which a provider is down
    #[serde(default = "default_down_error_rate")]
    pub down_error_rate: f64,
    /// Error rate above which a provider is degraded, or down with a recent error
    #[serde(default = "default_degraded_error_rate")]
    pub degraded_error_rate: f64,
    /// Average response time in milliseconds above which a provider is degraded
    #[serde(default = "default_slow_response_ms")]
    pub slow_response_ms: f64,
    /// Seconds during which the last error counts as recent
    #[serde(default = "default_recent_error_window")]
    pub recent_error_window: u64,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            down_error_rate: default_down_error_rate(),
            degraded_error_rate: default_degraded_error_rate(),
            slow_response_ms: default_slow_response_ms(),
            recent_error_window: default_recent_error_window(),
        }
    }
}

impl HealthConfig {
    pub fn recent_error_window(&self) -> Duration {
        Duration::from_secs(self.recent_error_window)
    }
}
