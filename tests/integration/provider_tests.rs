//! HTTP providers against a local mock server

#[cfg(test)]
mod tests {
    use crate::common::{completion_body, provider_config};
    use chat_relay::config::{ProvidersConfig, RouterConfig};
    use chat_relay::core::providers::{GeneralProvider, SearchProvider};
    use chat_relay::utils::error::RetryConfig;
    use chat_relay::{
        AiService, ChatProvider, ChatRequest, ErrorKind, ProviderError, ProviderKind, QueryOptions,
        user_message,
    };
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(model: &str) -> ChatRequest {
        ChatRequest {
            model: model.to_string(),
            messages: vec![user_message("Hello")],
            max_tokens: 100,
            temperature: 0.5,
        }
    }

    #[tokio::test]
    async fn test_general_provider_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "max_tokens": 100,
                "stream": false,
                "messages": [{"role": "user", "content": "Hello"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Hi there!", 25)))
            .expect(1)
            .mount(&server)
            .await;

        let provider = GeneralProvider::new(&provider_config(
            "OpenAI",
            &format!("{}/v1", server.uri()),
            &[],
        ))
        .unwrap();
        let reply = provider.send(&request("gpt-4o-mini")).await.unwrap();

        assert_eq!(reply.content, "Hi there!");
        assert_eq!(reply.total_tokens, Some(25));
        assert_eq!(reply.model, "test-model");
        assert_eq!(reply.provider, ProviderKind::General);
    }

    #[tokio::test]
    async fn test_search_provider_appends_citations() {
        let server = MockServer::start().await;

        let mut body = completion_body("Rain expected tonight.", 30);
        body["search_results"] = json!([
            {"title": "Weather Service", "url": "https://weather.example/today"},
            {"url": "https://news.example/rain"},
            {"title": "No link"},
            {"title": "Third", "url": "https://third.example"},
            {"title": "Fourth", "url": "https://fourth.example"}
        ]);

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({"model": "sonar", "return_citations": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let provider =
            SearchProvider::new(&provider_config("Perplexity", &server.uri(), &["sonar"])).unwrap();
        let reply = provider.send(&request("sonar")).await.unwrap();

        assert_eq!(
            reply.content,
            "Rain expected tonight.\n\nSources:\n\
             [1] Weather Service - https://weather.example/today\n\
             [2] https://news.example/rain - https://news.example/rain\n\
             [3] Third - https://third.example"
        );
    }

    #[tokio::test]
    async fn test_null_search_results_keep_the_answer() {
        let server = MockServer::start().await;

        let mut body = completion_body("Sunny all day.", 20);
        body["search_results"] = serde_json::Value::Null;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;

        let provider =
            SearchProvider::new(&provider_config("Perplexity", &server.uri(), &["sonar"])).unwrap();
        let reply = provider.send(&request("sonar")).await.unwrap();

        assert_eq!(reply.content, "Sunny all day.");
        assert_eq!(reply.total_tokens, Some(20));
    }

    #[tokio::test]
    async fn test_null_choices_use_placeholder() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"choices": null, "search_results": null})),
            )
            .mount(&server)
            .await;

        let provider =
            SearchProvider::new(&provider_config("Perplexity", &server.uri(), &["sonar"])).unwrap();
        let reply = provider.send(&request("sonar")).await.unwrap();

        assert_eq!(reply.content, "No response received.");
    }

    #[tokio::test]
    async fn test_missing_content_uses_placeholder() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let provider =
            GeneralProvider::new(&provider_config("OpenAI", &server.uri(), &[])).unwrap();
        let reply = provider.send(&request("gpt-4o-mini")).await.unwrap();

        assert_eq!(reply.content, "No response received.");
        assert_eq!(reply.total_tokens, None);
    }

    #[tokio::test]
    async fn test_error_statuses_map_to_kinds() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({"model": "limited"})))
            .respond_with(
                ResponseTemplate::new(429)
                    .insert_header("retry-after", "7")
                    .set_body_string("slow down"),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"model": "broken"})))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"model": "forbidden"})))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "bad key"})))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"model": "garbled"})))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let provider =
            GeneralProvider::new(&provider_config("OpenAI", &server.uri(), &[])).unwrap();

        let limited = provider.send(&request("limited")).await.unwrap_err();
        assert_eq!(limited.kind(), ErrorKind::RateLimited);
        assert_eq!(limited.status(), Some(429));
        assert!(matches!(
            limited,
            ProviderError::RateLimit {
                retry_after: Some(7),
                ..
            }
        ));
        assert!(limited.is_retryable());

        let broken = provider.send(&request("broken")).await.unwrap_err();
        assert_eq!(broken.kind(), ErrorKind::ServerError);
        assert!(broken.to_string().contains("upstream unavailable"));

        let forbidden = provider.send(&request("forbidden")).await.unwrap_err();
        assert_eq!(forbidden.kind(), ErrorKind::AuthError);
        assert!(!forbidden.is_retryable());

        let garbled = provider.send(&request("garbled")).await.unwrap_err();
        assert_eq!(garbled.kind(), ErrorKind::ParseError);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Nothing listens on the discard port
        let provider =
            GeneralProvider::new(&provider_config("OpenAI", "http://127.0.0.1:9", &[])).unwrap();
        let err = provider.send(&request("gpt-4o-mini")).await.unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::Network | ErrorKind::Timeout));
        assert!(err.is_retryable());
    }

    /// Search keeps failing with 503, is retried, then general answers
    #[tokio::test]
    async fn test_service_over_http_falls_back() {
        let search_server = MockServer::start().await;
        let general_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .expect(2)
            .mount(&search_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({"model": "gpt-4o-mini"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("Headlines...", 40)))
            .expect(1)
            .mount(&general_server)
            .await;

        let providers = ProvidersConfig {
            general: provider_config("OpenAI", &general_server.uri(), &[]),
            search: provider_config("Perplexity", &search_server.uri(), &["sonar"]),
        };
        let service = AiService::builder()
            .with_registry(chat_relay::ProviderRegistry::from_config(&providers).unwrap())
            .with_retry(RetryConfig::immediate(1))
            .with_router(RouterConfig::default())
            .build();

        let reply = service
            .process_query(
                &[user_message("What's in the news today?")],
                None,
                QueryOptions::default(),
            )
            .await;
        assert_eq!(reply, "Headlines...");

        let stats = service.performance_stats().await;
        assert_eq!(stats.performance.providers[&ProviderKind::Search].failures, 2);
        assert_eq!(stats.performance.providers[&ProviderKind::General].total_tokens, 40);
        assert_eq!(stats.performance.errors_by_kind[&ErrorKind::ServerError], 2);
    }
}
