//! Scripted providers
//!
//! Answer from a queue of canned outcomes and record every request.

use async_trait::async_trait;
use chat_relay::{ChatProvider, ChatRequest, ProviderError, ProviderKind, ProviderReply};
use parking_lot::Mutex;
use std::collections::VecDeque;

/// Provider that replays scripted outcomes, then repeats its fallback outcome
#[derive(Debug)]
pub struct ScriptedProvider {
    kind: ProviderKind,
    name: String,
    models: Vec<String>,
    script: Mutex<VecDeque<Result<String, ProviderError>>>,
    fallback: Result<String, ProviderError>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedProvider {
    /// Always answers `reply`
    pub fn answering(kind: ProviderKind, reply: &str) -> Self {
        Self {
            kind,
            name: format!("{} test provider", kind),
            models: Vec::new(),
            script: Mutex::new(VecDeque::new()),
            fallback: Ok(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always fails with `error`
    pub fn failing(kind: ProviderKind, error: ProviderError) -> Self {
        let mut provider = Self::answering(kind, "");
        provider.fallback = Err(error);
        provider
    }

    pub fn with_models(mut self, models: &[&str]) -> Self {
        self.models = models.iter().map(|m| m.to_string()).collect();
        self
    }

    /// Queue one outcome ahead of the fallback
    pub fn then(self, outcome: Result<&str, ProviderError>) -> Self {
        self.script
            .lock()
            .push_back(outcome.map(|reply| reply.to_string()));
        self
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl ChatProvider for ScriptedProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn models(&self) -> &[String] {
        &self.models
    }

    async fn send(&self, request: &ChatRequest) -> Result<ProviderReply, ProviderError> {
        self.requests.lock().push(request.clone());
        let outcome = self
            .script
            .lock()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        outcome.map(|content| ProviderReply {
            content,
            model: request.model.clone(),
            provider: self.kind,
            total_tokens: Some(42),
        })
    }
}
