//! Core functionality for the relay
//!
//! Classification, routing, caching, provider access and the monitors the
//! router feeds.

pub mod cache_manager;
pub mod classifier;
pub mod health;
pub mod providers;
pub mod rate_limiter;
pub mod router;
pub mod tasks;
pub mod types;
