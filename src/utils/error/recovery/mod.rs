//! Error recovery utilities
//!
//! Retry with exponential backoff, applied around upstream provider calls.

mod retry;
mod types;

pub use retry::RetryPolicy;
pub use types::{RetryConfig, Retryable};
