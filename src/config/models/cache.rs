//! Cache configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Response cache configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Enable response caching
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Default TTL in seconds
    #[serde(default = "default_cache_ttl")]
    pub ttl: u64,
    /// TTL in seconds for news, weather and stock answers
    #[serde(default = "default_volatile_ttl")]
    pub volatile_ttl: u64,
    /// TTL in seconds for task, planning and reminder answers
    #[serde(default = "default_planning_ttl")]
    pub planning_ttl: u64,
    /// Maximum number of entries before FIFO eviction
    #[serde(default = "default_cache_max_entries")]
    pub max_entries: usize,
    /// Enable word-overlap matching on exact-key misses
    #[serde(default = "default_true")]
    pub semantic_matching: bool,
    /// Minimum word-overlap ratio for a semantic hit
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl: default_cache_ttl(),
            volatile_ttl: default_volatile_ttl(),
            planning_ttl: default_planning_ttl(),
            max_entries: default_cache_max_entries(),
            semantic_matching: true,
            similarity_threshold: default_similarity_threshold(),
        }
    }
}

impl CacheConfig {
    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.ttl)
    }

    pub fn volatile_ttl(&self) -> Duration {
        Duration::from_secs(self.volatile_ttl)
    }

    pub fn planning_ttl(&self) -> Duration {
        Duration::from_secs(self.planning_ttl)
    }
}
