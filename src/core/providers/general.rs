//! General-purpose chat-completion provider

use super::error::ProviderError;
use super::http::{HttpTransport, transform_chat_request};
use super::types::{ChatRequest, ProviderKind, ProviderReply};
use super::ChatProvider;
use crate::config::ProviderConfig;
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct GeneralProvider {
    name: String,
    models: Vec<String>,
    transport: HttpTransport,
}

impl GeneralProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            name: config.name.clone(),
            models: config.models.clone(),
            transport: HttpTransport::new(ProviderKind::General, config)?,
        })
    }

    pub fn build_request_body(&self, request: &ChatRequest) -> Value {
        transform_chat_request(request)
    }
}

#[async_trait]
impl ChatProvider for GeneralProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::General
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn models(&self) -> &[String] {
        &self.models
    }

    async fn send(&self, request: &ChatRequest) -> Result<ProviderReply, ProviderError> {
        let body = self.build_request_body(request);
        let response = self.transport.post_chat(&body).await?;

        Ok(ProviderReply {
            content: response.content(),
            model: response.model.clone().unwrap_or_else(|| request.model.clone()),
            provider: ProviderKind::General,
            total_tokens: response.total_tokens(),
        })
    }
}
