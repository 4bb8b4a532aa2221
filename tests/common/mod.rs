//! Common test utilities for chat-relay
//!
//! - Scripted providers that answer from a queue, no network
//! - Fixtures for HTTP provider configs and upstream response bodies

pub mod fixtures;
pub mod providers;

pub use fixtures::{completion_body, provider_config};
pub use providers::ScriptedProvider;

use chat_relay::utils::error::RetryConfig;
use chat_relay::{AiService, ChatProvider};
use std::sync::Arc;

/// Service over the given providers with instant retries
pub fn service_with(providers: &[Arc<dyn ChatProvider>], max_retries: u32) -> AiService {
    providers
        .iter()
        .fold(AiService::builder(), |builder, provider| {
            builder.with_provider(provider.clone())
        })
        .with_retry(RetryConfig::immediate(max_retries))
        .build()
}
