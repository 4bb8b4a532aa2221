//! Router, retry, health and model validators

use super::trait_def::Validate;
use crate::config::models::*;
use crate::core::router::ModelConfig;
use crate::utils::error::RetryConfig;
use tracing::debug;

impl Validate for RouterConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating router configuration");

        if self.max_model_attempts == 0 {
            return Err("Router max model attempts must be greater than 0".to_string());
        }

        for (provider, chain) in &self.fallback_chain {
            if chain.contains(provider) {
                return Err(format!("Provider {} cannot fall back to itself", provider));
            }
        }

        Ok(())
    }
}

impl Validate for RetryConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_retries > 10 {
            return Err("Retry max retries should not exceed 10".to_string());
        }

        if !self.max_delay.is_zero() && self.max_delay < self.base_delay {
            return Err("Retry max delay must not be less than base delay".to_string());
        }

        Ok(())
    }
}

impl Validate for HealthConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, rate) in [
            ("down", self.down_error_rate),
            ("degraded", self.degraded_error_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(format!("Health {} error rate must be between 0 and 1", name));
            }
        }

        if self.degraded_error_rate > self.down_error_rate {
            return Err("Health degraded error rate must not exceed the down error rate".to_string());
        }

        if self.slow_response_ms <= 0.0 {
            return Err("Health slow response threshold must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for ModelConfig {
    fn validate(&self) -> Result<(), String> {
        if self.primary_model.trim().is_empty() {
            return Err("Model primary model cannot be empty".to_string());
        }

        if self.max_tokens == 0 {
            return Err(format!("Model {} max tokens must be greater than 0", self.primary_model));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Model {} temperature must be between 0 and 2",
                self.primary_model
            ));
        }

        Ok(())
    }
}
