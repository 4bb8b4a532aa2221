//! Monitoring and observability
//!
//! Request performance tracking for the relay. Provider health lives in
//! [`crate::core::health`].

pub mod performance;

pub use performance::{
    Cacheable, PerformanceMonitor, PerformanceStats, ProviderPerformance, RequestOptions,
};
