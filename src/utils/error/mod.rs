//! Error handling utilities
//!
//! This module defines the crate-level error type and the retry machinery used
//! around upstream provider calls.

mod helpers;
pub mod recovery;
mod types;

pub use recovery::{RetryConfig, RetryPolicy, Retryable};
pub use types::{RelayError, Result};
