//! Response cache implementation
//!
//! A single-tier in-memory cache with TTL expiry, FIFO eviction, tag
//! invalidation and a word-overlap semantic fallback.

use super::keys::{PLANNING_TAGS, VOLATILE_TAGS, cache_key, extract_tags, has_tag_in};
use super::semantic::{overlap_ratio, query_words};
use super::types::{AtomicCacheStats, CacheEntry, CacheMetadata, CacheStats};
use crate::config::CacheConfig;
use crate::core::types::Message;
use parking_lot::RwLock;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Consolidated cache storage under a single lock
#[derive(Debug, Default)]
struct CacheStorage {
    entries: HashMap<String, CacheEntry>,
    /// Keys in insertion order, oldest first
    order: VecDeque<String>,
    /// Key -> keys of entries with similar queries
    semantic_index: HashMap<String, BTreeSet<String>>,
}

impl CacheStorage {
    /// Drop an entry along with its queue slot and semantic links
    fn remove(&mut self, key: &str) -> Option<CacheEntry> {
        let entry = self.entries.remove(key)?;
        self.order.retain(|k| k != key);
        self.unlink(key);
        Some(entry)
    }

    fn unlink(&mut self, key: &str) {
        if let Some(links) = self.semantic_index.remove(key) {
            for other in links {
                if let Some(back) = self.semantic_index.get_mut(&other) {
                    back.remove(key);
                    if back.is_empty() {
                        self.semantic_index.remove(&other);
                    }
                }
            }
        }
    }

    fn link(&mut self, a: &str, b: &str) {
        self.semantic_index
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string());
        self.semantic_index
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string());
    }

    fn fresh(&self, key: &str, now: Instant) -> Option<&CacheEntry> {
        self.entries.get(key).filter(|e| !e.is_expired_at(now))
    }
}

/// In-memory response cache
#[derive(Debug)]
pub struct ResponseCache {
    storage: RwLock<CacheStorage>,
    config: CacheConfig,
    /// Cache statistics (lock-free atomics for hot path)
    stats: Arc<AtomicCacheStats>,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl ResponseCache {
    /// Create a new response cache
    pub fn new(config: CacheConfig) -> Self {
        info!(
            max_entries = config.max_entries,
            semantic = config.semantic_matching,
            "Response cache initialized"
        );
        Self {
            storage: RwLock::new(CacheStorage::default()),
            config,
            stats: Arc::new(AtomicCacheStats::default()),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Look up a response for a conversation.
    ///
    /// Exact key first; on a miss, entries whose query shares enough words
    /// with the latest message. Every call counts exactly one hit or miss.
    pub fn get(&self, messages: &[Message]) -> Option<String> {
        if !self.config.enabled {
            self.stats.misses.fetch_add(1, Ordering::Relaxed);
            return None;
        }

        let key = cache_key(messages);
        let now = Instant::now();
        let mut storage = self.storage.write();

        let exact = storage
            .entries
            .get(&key)
            .map(|entry| (!entry.is_expired_at(now)).then(|| entry.response.clone()));

        // Links of an expired entry outlive it for this lookup
        let mut linked = BTreeSet::new();
        match exact {
            Some(Some(response)) => {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                debug!(key = %short(&key), "Cache hit");
                return Some(response);
            }
            Some(None) => {
                if let Some(links) = storage.semantic_index.get(&key) {
                    linked = links.clone();
                }
                storage.remove(&key);
                debug!(key = %short(&key), "Removed expired cache entry");
            }
            None => {}
        }

        if self.config.semantic_matching {
            if let Some(response) =
                self.semantic_lookup(&mut storage, &key, &linked, messages, now)
            {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                self.stats.semantic_hits.fetch_add(1, Ordering::Relaxed);
                return Some(response);
            }
        }

        self.stats.misses.fetch_add(1, Ordering::Relaxed);
        debug!(key = %short(&key), "Cache miss");
        None
    }

    /// Semantic lookup: keys linked to the queried entry first, then every
    /// entry in insertion order
    fn semantic_lookup(
        &self,
        storage: &mut CacheStorage,
        key: &str,
        linked: &BTreeSet<String>,
        messages: &[Message],
        now: Instant,
    ) -> Option<String> {
        for other in linked {
            if let Some(entry) = storage.fresh(other, now) {
                debug!(key = %short(key), linked = %short(other), "Semantic cache hit via index");
                return Some(entry.response.clone());
            }
        }

        let words = query_words(&messages.last().map(Message::text).unwrap_or_default());
        if words.is_empty() {
            return None;
        }

        let mut expired = Vec::new();
        let mut found = None;
        for candidate in &storage.order {
            let Some(entry) = storage.entries.get(candidate) else {
                continue;
            };
            if entry.is_expired_at(now) {
                expired.push(candidate.clone());
                continue;
            }
            if overlap_ratio(&words, &entry.query_words) >= self.config.similarity_threshold {
                debug!(key = %short(key), matched = %short(candidate), "Semantic cache hit");
                found = Some(entry.response.clone());
                break;
            }
        }

        for stale in expired {
            storage.remove(&stale);
        }
        found
    }

    /// TTL for an entry: override, then tag-derived, then the configured default
    pub fn resolve_ttl(&self, tags: &BTreeSet<String>, ttl_override: Option<Duration>) -> Duration {
        if let Some(ttl) = ttl_override.filter(|ttl| !ttl.is_zero()) {
            return ttl;
        }
        if has_tag_in(tags, VOLATILE_TAGS) {
            return self.config.volatile_ttl();
        }
        if has_tag_in(tags, PLANNING_TAGS) {
            return self.config.planning_ttl();
        }
        self.config.default_ttl()
    }

    /// Store a response for a conversation
    pub fn set(
        &self,
        messages: &[Message],
        response: impl Into<String>,
        ttl_override: Option<Duration>,
        metadata: Option<CacheMetadata>,
    ) {
        if !self.config.enabled || self.config.max_entries == 0 {
            return;
        }

        let key = cache_key(messages);
        let tags = extract_tags(messages);
        let ttl = self.resolve_ttl(&tags, ttl_override);
        let query_text = messages.last().map(Message::text).unwrap_or_default();
        let words = query_words(&query_text);

        let mut storage = self.storage.write();

        if storage.entries.contains_key(&key) {
            storage.unlink(&key);
        } else {
            while storage.entries.len() >= self.config.max_entries {
                let Some(oldest) = storage.order.front().cloned() else {
                    break;
                };
                storage.remove(&oldest);
                self.stats.evictions.fetch_add(1, Ordering::Relaxed);
                debug!(key = %short(&oldest), "Evicted oldest cache entry");
            }
            storage.order.push_back(key.clone());
        }

        if self.config.semantic_matching && !words.is_empty() {
            let similar: Vec<String> = storage
                .entries
                .iter()
                .filter(|(other, entry)| {
                    *other != &key
                        && overlap_ratio(&words, &entry.query_words)
                            >= self.config.similarity_threshold
                })
                .map(|(other, _)| other.clone())
                .collect();
            for other in similar {
                storage.link(&key, &other);
            }
        }

        debug!(key = %short(&key), ttl_secs = ttl.as_secs(), ?tags, "Cached response");
        storage.entries.insert(
            key,
            CacheEntry {
                response: response.into(),
                created_at: Instant::now(),
                ttl,
                tags,
                query_text,
                query_words: words,
                metadata: metadata.unwrap_or_default(),
            },
        );
    }

    /// Remove every entry carrying any of `tags`; returns how many went
    pub fn invalidate_by_tags(&self, tags: &[&str]) -> usize {
        let mut storage = self.storage.write();
        let doomed: Vec<String> = storage
            .entries
            .iter()
            .filter(|(_, entry)| entry.has_any_tag(tags))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &doomed {
            storage.remove(key);
        }

        info!(?tags, removed = doomed.len(), "Invalidated cache entries by tag");
        doomed.len()
    }

    /// Sweep expired entries; returns how many went
    pub fn cleanup_expired(&self) -> usize {
        let now = Instant::now();
        let mut storage = self.storage.write();
        let expired: Vec<String> = storage
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired_at(now))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired {
            storage.remove(key);
        }

        if !expired.is_empty() {
            info!("Cleaned up {} expired cache entries", expired.len());
        }
        expired.len()
    }

    /// Tags stored for a conversation's entry, if cached
    pub fn tags_for(&self, messages: &[Message]) -> Option<BTreeSet<String>> {
        let key = cache_key(messages);
        self.storage.read().entries.get(&key).map(|e| e.tags.clone())
    }

    /// Keys semantically linked to a conversation's entry
    pub fn similar_keys(&self, messages: &[Message]) -> HashSet<String> {
        let key = cache_key(messages);
        self.storage
            .read()
            .semantic_index
            .get(&key)
            .map(|links| links.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.storage.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }

    /// Clear all entries and statistics
    pub fn clear(&self) {
        {
            let mut storage = self.storage.write();
            storage.entries.clear();
            storage.order.clear();
            storage.semantic_index.clear();
        }
        self.stats.reset();
        info!("Response cache cleared");
    }
}

/// Key prefix for log lines
fn short(key: &str) -> &str {
    key.get(..12).unwrap_or(key)
}
