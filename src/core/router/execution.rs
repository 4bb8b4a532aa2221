//! Running an attempt plan with retries, and turning failures into replies

use super::fallback::AttemptPlan;
use super::selection::ModelConfig;
use super::service::AiService;
use crate::core::providers::{
    ChatProvider, ChatRequest, ErrorKind, ErrorSeverity, ProviderError, ProviderKind,
    ProviderReply,
};
use crate::core::types::Message;
use std::time::Instant;
use tracing::{debug, warn};

/// Reply when nothing more specific can be said
pub const GENERIC_APOLOGY: &str = "I'm sorry, I couldn't reach the assistant service right now. \
Please check your connection and try again.";

impl AiService {
    /// Try each attempt in order until one succeeds.
    ///
    /// Every attempt goes through the retry policy. An authentication failure
    /// skips the remaining models of that provider.
    pub(super) async fn execute_plan(
        &self,
        plan: &AttemptPlan,
        messages: &[Message],
        model_config: &ModelConfig,
    ) -> Result<ProviderReply, ProviderError> {
        let mut last_error: Option<ProviderError> = None;
        let mut rejected: Option<ProviderKind> = None;

        for (index, attempt) in plan.attempts().iter().enumerate() {
            if rejected == Some(attempt.provider) {
                continue;
            }
            let Some(provider) = self.registry.get(attempt.provider) else {
                continue;
            };

            if index > 0 {
                warn!(
                    provider = %attempt.provider,
                    model = %attempt.model,
                    "Falling back after failed attempt"
                );
            }

            let request = ChatRequest {
                model: attempt.model.clone(),
                messages: messages.to_vec(),
                max_tokens: model_config.max_tokens,
                temperature: model_config.temperature,
            };

            match self
                .retry
                .call(|| self.send_once(provider.as_ref(), &request))
                .await
            {
                Ok(reply) => return Ok(reply),
                Err(err) => {
                    if err.kind() == ErrorKind::AuthError {
                        rejected = Some(attempt.provider);
                    }
                    last_error = Some(err);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ProviderError::other(plan.selected(), "no provider registered for this query")
        }))
    }

    /// One upstream call, recorded in the health and performance monitors
    async fn send_once(
        &self,
        provider: &dyn ChatProvider,
        request: &ChatRequest,
    ) -> Result<ProviderReply, ProviderError> {
        let kind = provider.kind();
        let started = Instant::now();
        let result = self
            .performance
            .track_request(kind, &request.model, provider.send(request))
            .await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(reply) => {
                self.health.record_request(kind, elapsed_ms, true, None);
                if let Some(tokens) = reply.total_tokens {
                    self.performance.record_tokens(kind, tokens);
                }
                debug!(provider = %kind, model = %reply.model, elapsed_ms, "Provider call succeeded");
            }
            Err(err) => {
                self.health
                    .record_request(kind, elapsed_ms, false, Some(&err.to_string()));
                self.performance.record_error(kind, err.kind());
            }
        }

        result
    }

    /// Reply shown to the user when every attempt failed
    pub(super) fn apology(&self, error: &ProviderError) -> String {
        match error.severity() {
            ErrorSeverity::Medium => format!(
                "I'm sorry, {} is busy or having trouble right now. Please try again in a moment.",
                self.registry.display_name(error.provider())
            ),
            _ => GENERIC_APOLOGY.to_string(),
        }
    }
}

/// Split text into word chunks that concatenate back to the original
pub fn word_chunks(text: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_space = false;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            in_space = true;
        } else if in_space {
            chunks.push(&text[start..i]);
            start = i;
            in_space = false;
        }
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }

    chunks
}
