//! Provider health monitoring
//!
//! Rolling request and error counts per provider, turned into a
//! healthy/degraded/down status on demand.

pub mod monitor;
pub mod types;

pub use monitor::HealthMonitor;
pub use types::{HealthMetric, HealthStatus, ProviderHealthReport};
