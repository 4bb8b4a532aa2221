//! Cache manager type definitions
//!
//! Cache entries, their metadata, and statistics.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Facts about how a cached response was produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheMetadata {
    /// Model that produced the response
    pub model: Option<String>,
    /// Tokens spent on the response
    pub token_count: Option<u64>,
    /// Upstream response time
    pub response_time_ms: Option<u64>,
}

/// Cache entry with metadata
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached response
    pub response: String,
    /// When the entry was created
    pub created_at: Instant,
    /// Lifetime from `created_at`, always positive
    pub ttl: Duration,
    /// Tags derived from the latest message
    pub tags: BTreeSet<String>,
    /// Text of the latest message, used for semantic matching
    pub query_text: String,
    /// Significant words of `query_text`
    pub query_words: HashSet<String>,
    pub metadata: CacheMetadata,
}

impl CacheEntry {
    /// Whether the entry is past its TTL at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) > self.ttl
    }

    /// Check if the entry is expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Get the age of the entry
    pub fn age(&self) -> Duration {
        Instant::now().saturating_duration_since(self.created_at)
    }

    pub fn has_any_tag(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.tags.contains(*tag))
    }
}

/// Atomic cache statistics for lock-free hot path updates
#[derive(Debug, Default)]
pub struct AtomicCacheStats {
    /// Lookups answered from the cache, semantic hits included
    pub hits: AtomicU64,
    /// Lookups that found nothing
    pub misses: AtomicU64,
    /// Hits served by word-overlap matching
    pub semantic_hits: AtomicU64,
    /// Entries removed to make room
    pub evictions: AtomicU64,
}

/// Cache statistics snapshot (returned to callers)
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub semantic_hits: u64,
    pub evictions: u64,
    /// Entries currently stored, expired ones not yet swept included
    pub entries: usize,
    /// `hits / (hits + misses)`, 0 when there were no lookups
    pub hit_rate: f64,
}

impl AtomicCacheStats {
    /// Create a snapshot of current stats
    pub fn snapshot(&self, entries: usize) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;

        CacheStats {
            hits,
            misses,
            semantic_hits: self.semantic_hits.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            entries,
            hit_rate: if total == 0 {
                0.0
            } else {
                hits as f64 / total as f64
            },
        }
    }

    /// Reset all stats to zero
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.semantic_hits.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
    }
}
