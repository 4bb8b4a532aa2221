//! End-to-end routing scenarios through `AiService`

#[cfg(test)]
mod tests {
    use crate::common::{ScriptedProvider, service_with};
    use chat_relay::{
        ChatProvider, HealthStatus, ProviderError, ProviderKind, QueryOptions, QueryType,
        TaskPriority, classify, user_message,
    };
    use std::sync::Arc;

    fn pair(
        general: ScriptedProvider,
        search: ScriptedProvider,
    ) -> (Arc<ScriptedProvider>, Arc<ScriptedProvider>, Vec<Arc<dyn ChatProvider>>) {
        let general = Arc::new(general);
        let search = Arc::new(search);
        let providers: Vec<Arc<dyn ChatProvider>> = vec![general.clone(), search.clone()];
        (general, search, providers)
    }

    /// Weather questions are news that needs the web, so they go to search
    #[tokio::test]
    async fn test_weather_question_routes_to_search() {
        let classification = classify("What's the weather today?");
        assert!(classification.needs_web_search);
        assert_eq!(classification.query_type, QueryType::News);

        let (general, search, providers) = pair(
            ScriptedProvider::answering(ProviderKind::General, "general answer"),
            ScriptedProvider::answering(ProviderKind::Search, "Sunny, 21°C")
                .with_models(&["sonar", "sonar-pro"]),
        );
        let service = service_with(&providers, 0);

        let mut streamed = String::new();
        let mut collect = |chunk: &str| streamed.push_str(chunk);
        let reply = service
            .process_query(
                &[user_message("What's the weather today?")],
                Some(&mut collect),
                QueryOptions::default(),
            )
            .await;

        assert_eq!(reply, "Sunny, 21°C");
        assert_eq!(streamed, reply);
        assert_eq!(search.calls(), 1);
        assert_eq!(general.calls(), 0);

        let request = &search.requests()[0];
        assert_eq!(request.model, "sonar");
        assert_eq!(request.max_tokens, 1000);
        assert_eq!(request.temperature, 0.3);
    }

    /// Creative requests use the general provider with the creative settings
    #[tokio::test]
    async fn test_poem_routes_to_general_with_creative_settings() {
        assert_eq!(
            classify("Write me a short poem about autumn").query_type,
            QueryType::Creative
        );

        let (general, search, providers) = pair(
            ScriptedProvider::answering(ProviderKind::General, "Leaves fall softly"),
            ScriptedProvider::answering(ProviderKind::Search, "unused"),
        );
        let service = service_with(&providers, 0);

        let reply = service
            .process_query(
                &[user_message("Write me a short poem about autumn")],
                None,
                QueryOptions::default(),
            )
            .await;

        assert_eq!(reply, "Leaves fall softly");
        assert_eq!(search.calls(), 0);
        let request = &general.requests()[0];
        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.temperature, 0.9);
        assert_eq!(request.max_tokens, 1500);
    }

    /// Task blocks in a reply come back as structured tasks
    #[tokio::test]
    async fn test_tasks_extracted_from_reply() {
        let (_, _, providers) = pair(
            ScriptedProvider::answering(ProviderKind::General, "ok"),
            ScriptedProvider::answering(ProviderKind::Search, "ok"),
        );
        let service = service_with(&providers, 0);

        let tasks = service.extract_tasks("Task: Buy milk\nDate: 2025-03-01\nPriority: high");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Buy milk");
        assert_eq!(tasks[0].date.to_string(), "2025-03-01");
        assert_eq!(tasks[0].priority, TaskPriority::High);
        assert!(tasks[0].time.is_none());
    }

    /// When every provider fails the caller still gets a string
    #[tokio::test]
    async fn test_total_failure_resolves_to_apology() {
        let (general, search, providers) = pair(
            ScriptedProvider::failing(
                ProviderKind::General,
                ProviderError::network(ProviderKind::General, "connection refused"),
            ),
            ScriptedProvider::failing(
                ProviderKind::Search,
                ProviderError::network(ProviderKind::Search, "connection refused"),
            ),
        );
        let service = service_with(&providers, 1);

        let reply = service
            .process_query(
                &[user_message("What's the latest news?")],
                None,
                QueryOptions::default(),
            )
            .await;

        assert!(reply.contains("sorry"));
        assert!(reply.contains("connection"));
        assert_eq!(search.calls(), 2);
        assert_eq!(general.calls(), 2);
        assert!(service.cache().is_empty());

        let stats = service.performance_stats().await;
        assert_eq!(stats.performance.failed_requests, 1);
        assert!(
            stats
                .health
                .iter()
                .all(|report| report.status == HealthStatus::Down)
        );
    }

    /// Forcing a provider overrides the classification
    #[tokio::test]
    async fn test_forced_provider() {
        let (general, search, providers) = pair(
            ScriptedProvider::answering(ProviderKind::General, "general"),
            ScriptedProvider::answering(ProviderKind::Search, "search"),
        );
        let service = service_with(&providers, 0);

        let reply = service
            .process_query(
                &[user_message("hello")],
                None,
                QueryOptions::default().with_provider(ProviderKind::Search),
            )
            .await;

        assert_eq!(reply, "search");
        assert_eq!(search.calls(), 1);
        assert_eq!(general.calls(), 0);
    }

    /// A server error on search falls back to general once retries run out
    #[tokio::test]
    async fn test_search_outage_falls_back_to_general() {
        let (general, search, providers) = pair(
            ScriptedProvider::answering(ProviderKind::General, "from general"),
            ScriptedProvider::failing(
                ProviderKind::Search,
                ProviderError::server_error(ProviderKind::Search, 502, "bad gateway"),
            ),
        );
        let service = service_with(&providers, 2);

        let reply = service
            .process_query(
                &[user_message("current stock price of ACME")],
                None,
                QueryOptions::default(),
            )
            .await;

        assert_eq!(reply, "from general");
        assert_eq!(search.calls(), 3);
        assert_eq!(general.calls(), 1);
    }

    /// The advisory limiter counts per provider and user
    #[tokio::test]
    async fn test_can_make_request_passthrough() {
        let (_, _, providers) = pair(
            ScriptedProvider::answering(ProviderKind::General, "ok"),
            ScriptedProvider::answering(ProviderKind::Search, "ok"),
        );
        let service = service_with(&providers, 0);

        assert!(service.can_make_request(ProviderKind::Search, Some("ana")).await);
        assert_eq!(
            service
                .rate_limiter()
                .remaining_requests(ProviderKind::Search, Some("ana"))
                .await,
            99
        );
    }
}
