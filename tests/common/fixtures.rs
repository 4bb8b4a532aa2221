//! Test fixtures

use chat_relay::config::ProviderConfig;
use serde_json::{Value, json};

/// Provider config pointed at a local mock server
pub fn provider_config(name: &str, base_url: &str, models: &[&str]) -> ProviderConfig {
    ProviderConfig {
        name: name.to_string(),
        base_url: base_url.to_string(),
        api_key: "test-key".to_string(),
        timeout: 5,
        models: models.iter().map(|m| m.to_string()).collect(),
    }
}

/// Minimal successful chat-completion body
pub fn completion_body(content: &str, total_tokens: u64) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "test-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 10,
            "completion_tokens": total_tokens - 10,
            "total_tokens": total_tokens
        }
    })
}
