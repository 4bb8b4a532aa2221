//! Provider configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Connection settings for one upstream chat-completion API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Display name, used in log lines and user-facing apologies
    pub name: String,
    /// Base URL; requests go to `{base_url}/chat/completions`
    pub base_url: String,
    /// API key sent as a bearer token
    #[serde(default)]
    pub api_key: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Models this provider uses instead of the query-type table, in order
    #[serde(default)]
    pub models: Vec<String>,
}

impl ProviderConfig {
    /// Defaults for the general chat-completion provider
    pub fn general() -> Self {
        Self {
            name: "OpenAI".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: String::new(),
            timeout: default_timeout(),
            models: Vec::new(),
        }
    }

    /// Defaults for the web-search provider
    pub fn search() -> Self {
        Self {
            name: "Perplexity".to_string(),
            base_url: "https://api.perplexity.ai".to_string(),
            api_key: String::new(),
            timeout: default_timeout(),
            models: vec!["sonar".to_string(), "sonar-pro".to_string()],
        }
    }

    /// Whether an API key is configured
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

/// Both upstream providers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default = "ProviderConfig::general")]
    pub general: ProviderConfig,
    #[serde(default = "ProviderConfig::search")]
    pub search: ProviderConfig,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            general: ProviderConfig::general(),
            search: ProviderConfig::search(),
        }
    }
}
