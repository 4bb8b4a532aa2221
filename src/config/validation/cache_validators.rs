//! Cache and rate limit configuration validators

use super::trait_def::Validate;
use crate::config::models::*;

impl Validate for CacheConfig {
    fn validate(&self) -> Result<(), String> {
        if self.ttl == 0 || self.volatile_ttl == 0 || self.planning_ttl == 0 {
            return Err("Cache TTLs must be greater than 0".to_string());
        }

        if self.max_entries == 0 {
            return Err("Cache max entries must be greater than 0".to_string());
        }

        if !(0.0..=1.0).contains(&self.similarity_threshold) || self.similarity_threshold == 0.0 {
            return Err("Cache similarity threshold must be in (0, 1]".to_string());
        }

        Ok(())
    }
}

impl Validate for RateLimitConfig {
    fn validate(&self) -> Result<(), String> {
        if self.window == 0 {
            return Err("Rate limit window must be greater than 0".to_string());
        }

        if self.general_rpm == 0 || self.search_rpm == 0 {
            return Err("Rate limit quotas must be greater than 0".to_string());
        }

        Ok(())
    }
}
