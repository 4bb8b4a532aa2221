//! Response caching
//!
//! Answers are cached per conversation tail (the last three messages) with
//! tag-derived TTLs, FIFO eviction at capacity, tag invalidation, and a
//! word-overlap fallback for near-identical questions.

pub mod keys;
pub mod manager;
pub mod semantic;
pub mod types;


pub use keys::{cache_key, extract_tags};
pub use manager::ResponseCache;
pub use semantic::{overlap_ratio, query_words};
pub use types::{CacheEntry, CacheMetadata, CacheStats};
