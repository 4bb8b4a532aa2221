//! Retry mechanism with exponential backoff and random jitter

use super::types::{RetryConfig, Retryable};
use rand::Rng;
use std::time::Duration;
use tracing::{debug, warn};

/// Retry mechanism with exponential backoff
#[derive(Debug, Clone, Default)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    /// Create a new retry policy
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Execute a function with retry logic.
    ///
    /// The function runs at most `max_retries + 1` times. A non-retryable
    /// error, or the last retryable one, is returned as is.
    pub async fn call<F, Fut, R, E>(&self, mut f: F) -> std::result::Result<R, E>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = std::result::Result<R, E>>,
        E: Retryable + std::fmt::Display,
    {
        let mut attempt: u32 = 0;

        loop {
            match f().await {
                Ok(result) => {
                    if attempt > 0 {
                        debug!("Retry succeeded on attempt {}", attempt + 1);
                    }
                    return Ok(result);
                }
                Err(error) => {
                    if !error.is_retryable() {
                        debug!("Not retrying non-retryable error: {}", error);
                        return Err(error);
                    }
                    if attempt >= self.config.max_retries {
                        warn!("Giving up after {} attempts: {}", attempt + 1, error);
                        return Err(error);
                    }

                    let delay = self.delay_for(attempt, error.retry_after());
                    warn!(
                        "Attempt {} failed: {}, retrying in {:?}",
                        attempt + 1,
                        error,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Backoff delay raised to the upstream's `Retry-After`, still capped by `max_delay`
    pub fn delay_for(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        let delay = self.backoff_delay(attempt);
        match retry_after {
            Some(floor) => delay.max(floor).min(self.config.max_delay),
            None => delay,
        }
    }

    /// Delay before retry number `attempt` (0-based): `base * 2^attempt + jitter`
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let exponential = self
            .config
            .base_delay
            .saturating_mul(2u32.saturating_pow(attempt));

        let jitter_ms = self.config.max_jitter.as_millis() as u64;
        let jitter = if jitter_ms == 0 {
            Duration::ZERO
        } else {
            Duration::from_millis(rand::thread_rng().gen_range(0..=jitter_ms))
        };

        exponential.saturating_add(jitter).min(self.config.max_delay)
    }
}
