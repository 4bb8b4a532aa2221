//! Configuration loading from files

#[cfg(test)]
mod tests {
    use chat_relay::{AiService, Config, ProviderKind, QueryType, RelayError};
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_full_config_file() {
        let file = write_config(
            r#"
providers:
  general:
    name: Local
    base_url: "http://localhost:11434/v1"
    api_key: local-key
    timeout: 60
  search:
    name: Search
    base_url: "https://search.example/api"
    api_key: search-key
    models: [sonar-small]
cache:
  ttl: 120
  max_entries: 50
  similarity_threshold: 0.8
retry:
  max_retries: 2
  base_delay: 200
  max_jitter: 0
rate_limit:
  window: 30
  search_rpm: 10
health:
  recent_error_window: 60
router:
  fallback_chain:
    general: [search]
    search: [general]
  max_model_attempts: 2
models:
  news:
    primary_model: local-news
    fallback_models: [local-general]
    max_tokens: 500
    temperature: 0.2
    reasoning_hint: concise
assistant:
  system_prompt: "You are a concise assistant."
logging:
  level: debug
  json: true
"#,
        );

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.providers.general.timeout, 60);
        assert_eq!(config.providers.search.models, vec!["sonar-small"]);
        assert_eq!(config.cache.default_ttl(), Duration::from_secs(120));
        assert_eq!(config.retry.max_retries, 2);
        assert_eq!(config.retry.base_delay, Duration::from_millis(200));
        assert_eq!(config.rate_limit.limit_for(ProviderKind::Search), 10);
        assert_eq!(config.rate_limit.limit_for(ProviderKind::General), 200);
        assert_eq!(
            config.router.fallbacks_for(ProviderKind::General),
            &[ProviderKind::Search]
        );
        assert_eq!(config.models[&QueryType::News].max_tokens, 500);
        assert_eq!(config.assistant.system_prompt, "You are a concise assistant.");
        assert!(config.logging.json);

        let service = AiService::from_config(&config).unwrap();
        assert_eq!(service.registry().display_name(ProviderKind::General), "Local");
        assert_eq!(service.registry().len(), 2);
    }

    #[tokio::test]
    async fn test_empty_file_gives_defaults() {
        let file = write_config("{}\n");
        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.providers.general.base_url, "https://api.openai.com/v1");
        assert_eq!(config.providers.search.base_url, "https://api.perplexity.ai");
        assert_eq!(config.cache.max_entries, 100);
        assert_eq!(config.router.max_fallbacks, 1);
    }

    #[tokio::test]
    async fn test_bad_values_are_rejected() {
        let file = write_config("providers:\n  general:\n    name: x\n    base_url: nowhere\n");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(matches!(err, RelayError::Config(_)));
        assert!(err.to_string().contains("Provider config error"));

        let file = write_config("router:\n  fallback_chain:\n    search: [search]\n");
        assert!(Config::from_file(file.path()).await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_a_config_error() {
        let file = write_config("cache: [this is not a map");
        let err = Config::from_file(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
