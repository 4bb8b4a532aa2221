//! Rate Limiting Implementation
//!
//! Advisory sliding-window limits per provider and user.

mod limiter;
mod types;
mod utils;
mod window;


// Re-export public types
pub use limiter::{RateLimiter, rate_key};
pub use types::{ANONYMOUS_USER, RateLimitResult, RateLimitUsage};
