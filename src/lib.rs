//! # chat-relay
//!
//! Query routing and response caching core for chat assistants backed by two
//! hosted LLM APIs: a general chat-completion provider and a web-search
//! augmented one.
//!
//! ## Features
//!
//! - **Classification**: keyword and length heuristics pick a query type and
//!   decide whether live web data is needed
//! - **Routing**: per-type model settings, system context injection, retry
//!   with exponential backoff and a bounded provider fallback chain
//! - **Caching**: in-memory replies keyed by the recent conversation, with
//!   tag-driven TTLs, tag invalidation and word-overlap semantic matching
//! - **Monitoring**: request timing, token and error counters, provider health
//!   and advisory rate limits
//! - **Tasks**: parsing of `Task:` blocks proposed by the assistant
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chat_relay::{AiService, Config, QueryOptions, user_message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(None).await?;
//!     let service = AiService::from_config(&config)?;
//!
//!     let reply = service
//!         .process_query(
//!             &[user_message("What's the weather today?")],
//!             None,
//!             QueryOptions::default(),
//!         )
//!         .await;
//!     println!("{}", reply);
//!
//!     for task in service.extract_tasks(&reply) {
//!         println!("{} on {}", task.title, task.date);
//!     }
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod monitoring;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{RelayError, Result};

pub use core::cache_manager::{CacheStats, ResponseCache};
pub use core::classifier::{Complexity, QueryClassification, QueryType, Urgency, classify};
pub use core::health::{HealthMonitor, HealthStatus, ProviderHealthReport};
pub use core::providers::{
    ChatProvider, ChatRequest, ErrorKind, ProviderError, ProviderKind, ProviderRegistry,
    ProviderReply,
};
pub use core::rate_limiter::RateLimiter;
pub use core::router::{AiService, AiServiceBuilder, ModelConfig, QueryOptions, ServiceStats};
pub use core::tasks::{Task, TaskPriority, extract_tasks};
pub use core::types::{
    Message, MessageContent, MessageRole, assistant_message, system_message, user_message,
};
pub use monitoring::{PerformanceMonitor, PerformanceStats};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build time, seconds since the Unix epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("RELAY_BUILD_TIME"),
            git_hash: env!("RELAY_GIT_HASH"),
        }
    }
}

impl std::fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", NAME, self.version, self.git_hash)
    }
}

/// Build information for this binary
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
