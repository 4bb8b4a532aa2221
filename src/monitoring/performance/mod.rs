//! Request performance tracking
//!
//! Request timings, token totals, error kinds and model usage, plus the
//! cache-fronted request path used by the router.

mod bounded;
mod monitor;
mod types;


pub use monitor::PerformanceMonitor;
pub use types::{Cacheable, PerformanceStats, ProviderPerformance, RequestOptions};
