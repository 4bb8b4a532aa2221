//! The service object callers talk to

use super::context::{system_context, with_system_context};
use super::execution::word_chunks;
use super::fallback::AttemptPlan;
use super::selection::{ModelTable, select_provider};
use super::types::{QueryOptions, ServiceStats};
use crate::config::{
    AssistantConfig, CacheConfig, Config, HealthConfig, RateLimitConfig, RouterConfig,
};
use crate::core::cache_manager::ResponseCache;
use crate::core::classifier::QueryClassifier;
use crate::core::health::HealthMonitor;
use crate::core::providers::{ChatProvider, ProviderKind, ProviderRegistry, ProviderReply};
use crate::core::rate_limiter::RateLimiter;
use crate::core::tasks::{Task, TaskExtractor};
use crate::core::types::{Message, latest_user_text};
use crate::monitoring::{PerformanceMonitor, RequestOptions};
use crate::utils::error::{Result, RetryConfig, RetryPolicy};
use crate::utils::{generate_request_id, truncate_string};
use chrono::Local;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Query routing service.
///
/// Owns every piece of shared state: the provider registry, response cache,
/// monitors and rate limiter. Build one per application with
/// [`AiService::builder`] or [`AiService::from_config`] and share it behind an
/// `Arc`.
#[derive(Debug)]
pub struct AiService {
    pub(super) registry: ProviderRegistry,
    pub(super) classifier: QueryClassifier,
    pub(super) models: ModelTable,
    pub(super) router: RouterConfig,
    pub(super) retry: RetryPolicy,
    pub(super) cache: Arc<ResponseCache>,
    pub(super) performance: PerformanceMonitor,
    pub(super) health: HealthMonitor,
    pub(super) rate_limiter: RateLimiter,
    pub(super) tasks: TaskExtractor,
    pub(super) system_prompt: String,
}

impl AiService {
    pub fn builder() -> AiServiceBuilder {
        AiServiceBuilder::default()
    }

    /// Service with the HTTP providers and settings from `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let registry = ProviderRegistry::from_config(&config.providers)?;
        Ok(Self::builder()
            .with_registry(registry)
            .with_cache(config.cache.clone())
            .with_retry(config.retry.clone())
            .with_rate_limit(config.rate_limit.clone())
            .with_health(config.health.clone())
            .with_router(config.router.clone())
            .with_models(ModelTable::with_overrides(&config.models))
            .with_assistant(config.assistant.clone())
            .build())
    }

    /// Answer a conversation.
    ///
    /// Never fails: when every provider attempt fails the reply is an
    /// apology. On success the reply is also fed to `on_chunk` word by word.
    pub async fn process_query(
        &self,
        messages: &[Message],
        on_chunk: Option<&mut (dyn FnMut(&str) + Send)>,
        options: QueryOptions,
    ) -> String {
        let latest = latest_user_text(messages).unwrap_or_default();
        let classification = self.classifier.classify(&latest);
        let provider = select_provider(&classification, options.force_provider);
        let model_config = self.models.config_for(classification.query_type).clone();
        let plan = AttemptPlan::build(provider, &self.router, &self.registry, &model_config);

        let request_id = generate_request_id();
        debug!(%request_id, query = %truncate_string(&latest, 80), "Received query");
        info!(
            %request_id,
            %provider,
            classification = %classification.summary(),
            attempts = plan.attempts().len(),
            "Processing query"
        );

        let context = system_context(
            &classification,
            model_config.reasoning_hint,
            Local::now().fixed_offset(),
        );
        let prepared = with_system_context(messages, &self.system_prompt, &context);

        let request_options = RequestOptions {
            bypass_cache: options.bypass_cache,
            ttl: None,
            model: Some(model_config.primary_model.clone()),
            provider: Some(provider),
        };

        let result = self
            .performance
            .optimize_request::<ProviderReply, _, _, _>(
                messages,
                || self.execute_plan(&plan, &prepared, &model_config),
                request_options,
            )
            .await;

        match result {
            Ok(reply) => {
                if let Some(on_chunk) = on_chunk {
                    for chunk in word_chunks(&reply.content) {
                        on_chunk(chunk);
                    }
                }
                reply.content
            }
            Err(err) => {
                error!(
                    %request_id,
                    provider = %err.provider(),
                    kind = %err.kind(),
                    "All attempts failed: {}",
                    err
                );
                self.apology(&err)
            }
        }
    }

    /// Parse task blocks out of an assistant reply
    pub fn extract_tasks(&self, text: &str) -> Vec<Task> {
        self.tasks.extract(text)
    }

    /// Snapshot of performance, cache, health and rate-limit counters
    pub async fn performance_stats(&self) -> ServiceStats {
        ServiceStats {
            performance: self.performance.stats(),
            cache: self.cache.stats(),
            health: self.health.health_status(),
            rate_limits: self.rate_limiter.snapshot().await,
        }
    }

    /// Drop cached replies carrying any of `tags`
    pub fn invalidate_cache(&self, tags: &[&str]) -> usize {
        self.cache.invalidate_by_tags(tags)
    }

    /// Reset performance and health counters; cached replies stay
    pub fn clear_metrics(&self) {
        self.performance.clear();
        self.health.reset();
        info!("Service metrics cleared");
    }

    /// Advisory rate-limit check; records the request when allowed
    pub async fn can_make_request(&self, provider: ProviderKind, user_id: Option<&str>) -> bool {
        self.rate_limiter.can_make_request(provider, user_id).await
    }

    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    pub fn health(&self) -> &HealthMonitor {
        &self.health
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }
}

/// Builder for [`AiService`]
#[derive(Debug, Default)]
pub struct AiServiceBuilder {
    registry: ProviderRegistry,
    cache: CacheConfig,
    retry: RetryConfig,
    rate_limit: RateLimitConfig,
    health: HealthConfig,
    router: RouterConfig,
    models: ModelTable,
    assistant: AssistantConfig,
}

impl AiServiceBuilder {
    /// Replace the whole provider registry
    pub fn with_registry(mut self, registry: ProviderRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Register one provider
    pub fn with_provider(mut self, provider: Arc<dyn ChatProvider>) -> Self {
        self.registry.register(provider);
        self
    }

    pub fn with_cache(mut self, config: CacheConfig) -> Self {
        self.cache = config;
        self
    }

    pub fn with_retry(mut self, config: RetryConfig) -> Self {
        self.retry = config;
        self
    }

    pub fn with_rate_limit(mut self, config: RateLimitConfig) -> Self {
        self.rate_limit = config;
        self
    }

    pub fn with_health(mut self, config: HealthConfig) -> Self {
        self.health = config;
        self
    }

    pub fn with_router(mut self, config: RouterConfig) -> Self {
        self.router = config;
        self
    }

    pub fn with_models(mut self, models: ModelTable) -> Self {
        self.models = models;
        self
    }

    pub fn with_assistant(mut self, config: AssistantConfig) -> Self {
        self.assistant = config;
        self
    }

    pub fn build(self) -> AiService {
        let cache = Arc::new(ResponseCache::new(self.cache));
        info!(providers = ?self.registry.kinds(), "AI service initialized");

        AiService {
            registry: self.registry,
            classifier: QueryClassifier::new(),
            models: self.models,
            router: self.router,
            retry: RetryPolicy::new(self.retry),
            performance: PerformanceMonitor::new(cache.clone()),
            cache,
            health: HealthMonitor::new(self.health),
            rate_limiter: RateLimiter::new(self.rate_limit),
            tasks: TaskExtractor::new(),
            system_prompt: self.assistant.system_prompt,
        }
    }
}
