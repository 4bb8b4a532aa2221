//! Types and configuration for retry handling

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries after the first attempt; a call runs at most `max_retries + 1` times
    pub max_retries: u32,
    /// Base delay, doubled for every attempt
    #[serde(with = "duration_ms")]
    pub base_delay: Duration,
    /// Upper bound of the uniform jitter added to each delay
    #[serde(with = "duration_ms")]
    pub max_jitter: Duration,
    /// Ceiling applied after backoff and jitter
    #[serde(with = "duration_ms")]
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(1000),
            max_jitter: Duration::from_millis(1000),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryConfig {
    /// A config with no waiting between attempts, handy in tests and benches
    pub fn immediate(max_retries: u32) -> Self {
        Self {
            max_retries,
            base_delay: Duration::ZERO,
            max_jitter: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }
}

/// Errors that know whether repeating the call could succeed
pub trait Retryable {
    /// Whether the failed operation may be attempted again
    fn is_retryable(&self) -> bool;

    /// Minimum wait the upstream asked for before the next attempt
    fn retry_after(&self) -> Option<Duration> {
        None
    }
}

/// Durations serialized as integer milliseconds
pub(crate) mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(deserializer)?))
    }
}
