//! HTTP transport shared by the OpenAI-compatible providers

use super::error::ProviderError;
use super::types::{ChatCompletionResponse, ChatRequest, ProviderKind};
use crate::config::ProviderConfig;
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Path appended to every provider base URL
pub const CHAT_COMPLETIONS_PATH: &str = "chat/completions";

/// Bearer-authenticated JSON client for one provider
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    provider: ProviderKind,
    endpoint: String,
    api_key: String,
}

impl HttpTransport {
    pub fn new(provider: ProviderKind, config: &ProviderConfig) -> Result<Self, ProviderError> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout))
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| {
                ProviderError::other(provider, format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            provider,
            endpoint: chat_endpoint(&config.base_url),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST a chat-completion body and decode the response.
    ///
    /// Non-success statuses are mapped through
    /// [`ProviderError::from_http_status`] with the body read as text.
    pub async fn post_chat(&self, body: &Value) -> Result<ChatCompletionResponse, ProviderError> {
        if self.api_key.trim().is_empty() {
            return Err(ProviderError::authentication(
                self.provider,
                "No API key configured",
            ));
        }

        debug!(provider = %self.provider, endpoint = %self.endpoint, "Sending chat completion");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(self.provider, e))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<u64>().ok());
            let text = response.text().await.unwrap_or_default();
            return Err(
                ProviderError::from_http_status(self.provider, status.as_u16(), &text)
                    .with_retry_after(retry_after),
            );
        }

        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::from_reqwest(self.provider, e))?;

        serde_json::from_str(&text).map_err(|e| {
            ProviderError::response_parsing(self.provider, format!("Invalid JSON body: {}", e))
        })
    }
}

/// `{base_url}/chat/completions`, tolerant of a trailing slash
pub fn chat_endpoint(base_url: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), CHAT_COMPLETIONS_PATH)
}

/// Transform a chat request to the OpenAI-compatible wire body
pub fn transform_chat_request(request: &ChatRequest) -> Value {
    serde_json::json!({
        "model": request.model,
        "messages": request.messages,
        "max_tokens": request.max_tokens,
        "temperature": request.temperature,
        "stream": false,
    })
}
