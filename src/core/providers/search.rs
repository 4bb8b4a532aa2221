//! Web-search augmented chat-completion provider
//!
//! Same wire shape as the general provider, plus `return_citations` on the
//! request and up to [`MAX_CITATIONS`] sources appended to the reply.

use super::error::ProviderError;
use super::http::{HttpTransport, transform_chat_request};
use super::types::{ChatRequest, ProviderKind, ProviderReply, SearchResult};
use super::ChatProvider;
use crate::config::ProviderConfig;
use async_trait::async_trait;
use serde_json::Value;

/// Sources listed under a reply
pub const MAX_CITATIONS: usize = 3;

#[derive(Debug, Clone)]
pub struct SearchProvider {
    name: String,
    models: Vec<String>,
    transport: HttpTransport,
}

impl SearchProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            name: config.name.clone(),
            models: config.models.clone(),
            transport: HttpTransport::new(ProviderKind::Search, config)?,
        })
    }

    pub fn build_request_body(&self, request: &ChatRequest) -> Value {
        let mut body = transform_chat_request(request);
        body["return_citations"] = serde_json::json!(true);
        body
    }
}

/// Append `[n] title - url` lines under a `Sources:` heading
pub fn append_citations(content: &str, results: &[SearchResult]) -> String {
    let lines: Vec<String> = results
        .iter()
        .filter_map(|result| {
            let url = result.url.as_deref().filter(|url| !url.is_empty())?;
            let title = result
                .title
                .as_deref()
                .filter(|title| !title.is_empty())
                .unwrap_or(url);
            Some((title.to_string(), url.to_string()))
        })
        .take(MAX_CITATIONS)
        .enumerate()
        .map(|(i, (title, url))| format!("[{}] {} - {}", i + 1, title, url))
        .collect();

    if lines.is_empty() {
        return content.to_string();
    }

    format!("{}\n\nSources:\n{}", content, lines.join("\n"))
}

#[async_trait]
impl ChatProvider for SearchProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Search
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
            content: append_citations(&response.content(), &response.search_results),
            model: response.model.clone().unwrap_or_else(|| request.model.clone()),
            provider: ProviderKind::Search,
            total_tokens: response.total_tokens(),
        })
    }
}
