//! Upstream chat providers
//!
//! Two OpenAI-compatible HTTP providers behind the [`ChatProvider`] trait:
//! a general chat-completion API and a web-search augmented one.

pub mod error;
pub mod general;
pub mod http;
pub mod registry;
pub mod search;
pub mod types;

pub use error::{ErrorKind, ErrorSeverity, ProviderError};
pub use general::GeneralProvider;
pub use registry::ProviderRegistry;
pub use search::SearchProvider;
pub use types::{ChatRequest, EMPTY_REPLY_PLACEHOLDER, ProviderKind, ProviderReply};

use async_trait::async_trait;
use std::fmt::Debug;

/// A chat-completion backend
///
/// Implementations make exactly one upstream call per [`send`](Self::send);
/// retries and fallbacks belong to the router.
#[async_trait]
pub trait ChatProvider: Send + Sync + Debug {
    fn kind(&self) -> ProviderKind;

    /// Human-readable provider name
    fn display_name(&self) -> &str;

    /// Models to use instead of the query-type table; empty means use the table
    fn models(&self) -> &[String] {
        &[]
    }

    async fn send(&self, request: &ChatRequest) -> Result<ProviderReply, ProviderError>;
}
