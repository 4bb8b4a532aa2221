//! Attempt plan: the selected provider, then its fallback chain

use super::selection::ModelConfig;
use crate::config::RouterConfig;
use crate::core::providers::{ChatProvider, ProviderKind, ProviderRegistry};

/// One provider/model pair to try
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub provider: ProviderKind,
    pub model: String,
}

/// Ordered attempts for one query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptPlan {
    selected: ProviderKind,
    attempts: Vec<Attempt>,
}

impl AttemptPlan {
    /// Build the plan.
    ///
    /// Providers are `[selected] + fallback_chain[selected]`, at most
    /// `max_fallbacks` of the latter, skipping unregistered ones. Each
    /// provider contributes at most `max_model_attempts` models: its own
    /// configured models when it has any, else the query type's models.
    pub fn build(
        selected: ProviderKind,
        router: &RouterConfig,
        registry: &ProviderRegistry,
        model_config: &ModelConfig,
    ) -> Self {
        let mut providers = vec![selected];
        for fallback in router
            .fallbacks_for(selected)
            .iter()
            .filter(|p| **p != selected)
            .take(router.max_fallbacks)
        {
            if !providers.contains(fallback) {
                providers.push(*fallback);
            }
        }

        let per_provider = router.max_model_attempts.max(1);
        let attempts = providers
            .into_iter()
            .filter_map(|kind| registry.get(kind).map(|provider| (kind, provider)))
            .flat_map(|(kind, provider)| {
                models_for(provider.as_ref(), model_config)
                    .into_iter()
                    .take(per_provider)
                    .map(move |model| Attempt {
                        provider: kind,
                        model,
                    })
            })
            .collect();

        Self { selected, attempts }
    }

    pub fn selected(&self) -> ProviderKind {
        self.selected
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }
}

fn models_for(provider: &dyn ChatProvider, model_config: &ModelConfig) -> Vec<String> {
    if provider.models().is_empty() {
        model_config.models()
    } else {
        provider.models().to_vec()
    }
}
