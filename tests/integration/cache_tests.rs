//! Response cache behaviour through the public API

#[cfg(test)]
mod tests {
    use crate::common::{ScriptedProvider, service_with};
    use chat_relay::config::CacheConfig;
    use chat_relay::{
        ChatProvider, ProviderKind, QueryOptions, ResponseCache, assistant_message,
        system_message, user_message,
    };
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_repeat_question_is_served_from_cache() {
        let general = Arc::new(ScriptedProvider::answering(ProviderKind::General, "42"));
        let providers: Vec<Arc<dyn ChatProvider>> = vec![general.clone()];
        let service = service_with(&providers, 0);
        let messages = vec![user_message("What is the answer to everything?")];

        service.process_query(&messages, None, QueryOptions::default()).await;
        let mut chunks = Vec::new();
        let mut collect = |chunk: &str| chunks.push(chunk.to_string());
        let cached = service
            .process_query(&messages, Some(&mut collect), QueryOptions::default())
            .await;

        assert_eq!(cached, "42");
        assert_eq!(chunks, vec!["42"]);
        assert_eq!(general.calls(), 1);

        let stats = service.performance_stats().await;
        assert_eq!(stats.performance.cache_served, 1);
        assert_eq!(stats.cache.hits, 1);
    }

    #[tokio::test]
    async fn test_similar_question_hits_semantically() {
        let general = Arc::new(ScriptedProvider::answering(ProviderKind::General, "Paris"));
        let providers: Vec<Arc<dyn ChatProvider>> = vec![general.clone()];
        let service = service_with(&providers, 0);

        service
            .process_query(
                &[user_message("capital city of France please")],
                None,
                QueryOptions::default(),
            )
            .await;
        let reply = service
            .process_query(
                &[user_message("France capital city?")],
                None,
                QueryOptions::default(),
            )
            .await;

        assert_eq!(reply, "Paris");
        assert_eq!(general.calls(), 1);
        assert_eq!(service.cache().stats().semantic_hits, 1);
    }

    #[tokio::test]
    async fn test_invalidation_forces_a_fresh_call() {
        let general = Arc::new(ScriptedProvider::answering(ProviderKind::General, "noted"));
        let providers: Vec<Arc<dyn ChatProvider>> = vec![general.clone()];
        let service = service_with(&providers, 0);
        let messages = vec![user_message("Add a dentist task for Friday")];

        service.process_query(&messages, None, QueryOptions::default()).await;
        assert_eq!(service.invalidate_cache(&["task"]), 1);
        service.process_query(&messages, None, QueryOptions::default()).await;

        assert_eq!(general.calls(), 2);
    }

    #[tokio::test]
    async fn test_only_last_three_messages_form_the_key() {
        let cache = ResponseCache::new(CacheConfig {
            semantic_matching: false,
            ..CacheConfig::default()
        });
        let tail = vec![
            user_message("one"),
            assistant_message("two"),
            user_message("three"),
        ];
        let mut longer = vec![system_message("You are terse"), user_message("zero")];
        longer.extend(tail.clone());

        cache.set(&tail, "cached", None, None);
        assert_eq!(cache.get(&longer).as_deref(), Some("cached"));
    }

    #[tokio::test]
    async fn test_entries_expire_after_ttl() {
        let cache = ResponseCache::default();
        let messages = vec![user_message("short lived")];

        cache.set(&messages, "soon gone", Some(Duration::from_millis(40)), None);
        assert!(cache.get(&messages).is_some());

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(cache.get(&messages).is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_capacity_evicts_oldest_first() {
        let cache = ResponseCache::new(CacheConfig {
            max_entries: 2,
            semantic_matching: false,
            ..CacheConfig::default()
        });
        let first = vec![user_message("first question")];
        let second = vec![user_message("second question")];
        let third = vec![user_message("third question")];

        cache.set(&first, "1", None, None);
        cache.set(&second, "2", None, None);
        cache.set(&third, "3", None, None);

        assert!(cache.get(&first).is_none());
        assert_eq!(cache.get(&second).as_deref(), Some("2"));
        assert_eq!(cache.get(&third).as_deref(), Some("3"));
        assert_eq!(cache.stats().evictions, 1);
    }
}
