//! Configuration management for the relay
//!
//! Loads the YAML configuration file, overlays credentials from the
//! environment and validates every section.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::core::classifier::QueryType;
use crate::core::router::ModelConfig;
use crate::utils::error::{RelayError, Result, RetryConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Environment variables holding the general provider's API key, in priority order
pub const GENERAL_API_KEY_VARS: &[&str] = &["GENERAL_API_KEY", "OPENAI_API_KEY"];

/// Environment variables holding the search provider's API key, in priority order
pub const SEARCH_API_KEY_VARS: &[&str] = &["SEARCH_API_KEY", "PERPLEXITY_API_KEY"];

/// Main configuration struct for the relay
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub providers: ProvidersConfig,
    pub cache: CacheConfig,
    pub retry: RetryConfig,
    pub rate_limit: RateLimitConfig,
    pub health: HealthConfig,
    pub router: RouterConfig,
    /// Per query type replacements for the built-in model table
    pub models: HashMap<QueryType, ModelConfig>,
    pub assistant: AssistantConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RelayError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from YAML text without validating it
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| RelayError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Defaults plus credentials from the environment
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Read `.env` if present, then the file at `path` if it exists, then
    /// overlay environment credentials
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        if let Ok(env_file) = dotenvy::dotenv() {
            debug!("Loaded environment from {:?}", env_file);
        }

        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(path).await?,
            Some(path) => {
                return Err(RelayError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            None => Self::default(),
        };

        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Take API keys from the environment where set; keys already in the file
    /// lose to the environment
    pub fn apply_env(&mut self) {
        if let Some(key) = first_env(GENERAL_API_KEY_VARS) {
            self.providers.general.api_key = key;
        }
        if let Some(key) = first_env(SEARCH_API_KEY_VARS) {
            self.providers.search.api_key = key;
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.providers
            .validate()
            .map_err(|e| RelayError::Config(format!("Provider config error: {}", e)))?;
        self.cache
            .validate()
            .map_err(|e| RelayError::Config(format!("Cache config error: {}", e)))?;
        self.retry
            .validate()
            .map_err(|e| RelayError::Config(format!("Retry config error: {}", e)))?;
        self.rate_limit
            .validate()
            .map_err(|e| RelayError::Config(format!("Rate limit config error: {}", e)))?;
        self.health
            .validate()
            .map_err(|e| RelayError::Config(format!("Health config error: {}", e)))?;
        self.router
            .validate()
            .map_err(|e| RelayError::Config(format!("Router config error: {}", e)))?;

        for (query_type, model) in &self.models {
            model.validate().map_err(|e| {
                RelayError::Config(format!("Model config error for {}: {}", query_type, e))
            })?;
        }

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| RelayError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn first_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_config_from_file() {
        let config_content = r#"
providers:
  general:
    name: OpenAI
    base_url: "http://127.0.0.1:9000/v1"
    api_key: file-key
cache:
  max_entries: 10
models:
  creative:
    primary_model: gpt-4.1
    max_tokens: 900
    temperature: 1.0
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = Config::from_file(temp_file.path()).await.unwrap();
        assert_eq!(config.providers.general.base_url, "http://127.0.0.1:9000/v1");
        assert_eq!(config.providers.general.api_key, "file-key");
        assert_eq!(config.providers.search.name, "Perplexity");
        assert_eq!(config.cache.max_entries, 10);
        assert_eq!(config.cache.ttl, 300);
        assert_eq!(config.models[&QueryType::Creative].primary_model, "gpt-4.1");
        assert!(config.models[&QueryType::Creative].fallback_models.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_file_is_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"cache:\n  similarity_threshold: 4.0\n")
            .unwrap();

        let err = Config::from_file(temp_file.path()).await.unwrap_err();
        assert!(matches!(err, RelayError::Config(_)));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let err = Config::load(Some(Path::new("/definitely/not/here.yaml")))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_default_config_round_trips_yaml() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_first_env_skips_blank_values() {
        assert_eq!(first_env(&["CHAT_RELAY_TEST_UNSET_VARIABLE"]), None);
    }
}
