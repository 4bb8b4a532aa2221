//! Query router
//!
//! Classifies each conversation, picks a provider and model, injects the
//! system context and runs the attempt plan through the cache, the retry
//! policy and the fallback chain.
//!
//! - `selection` - model table and provider choice
//! - `fallback` - attempt plan across providers and models
//! - `context` - system context block
//! - `execution` - attempt loop, per-call metrics, apologies
//! - `service` - [`AiService`] and its builder

pub mod context;
pub mod execution;
pub mod fallback;
pub mod selection;
pub mod service;
pub mod types;

pub use context::{system_context, with_system_context};
pub use execution::{GENERIC_APOLOGY, word_chunks};
pub use fallback::{Attempt, AttemptPlan};
pub use selection::{ModelConfig, ModelTable, ReasoningHint, select_provider};
pub use service::{AiService, AiServiceBuilder};
pub use types::{QueryOptions, ServiceStats};
