//! Provider Registry
//!
//! Maps each [`ProviderKind`] to its implementation.

use super::general::GeneralProvider;
use super::search::SearchProvider;
use super::types::ProviderKind;
use super::{ChatProvider, ProviderError};
use crate::config::ProvidersConfig;
use std::collections::HashMap;
use std::sync::Arc;

/// Provider registry
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderKind, Arc<dyn ChatProvider>>,
}

impl ProviderRegistry {
    /// Create new provider registry
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Registry with the HTTP providers built from configuration
    pub fn from_config(config: &ProvidersConfig) -> Result<Self, ProviderError> {
        let mut registry = Self::new();
        registry.register(Arc::new(GeneralProvider::new(&config.general)?));
        registry.register(Arc::new(SearchProvider::new(&config.search)?));
        Ok(registry)
    }

    /// Register a provider, replacing any previous one of the same kind
    pub fn register(&mut self, provider: Arc<dyn ChatProvider>) {
        self.providers.insert(provider.kind(), provider);
    }

    pub fn get(&self, kind: ProviderKind) -> Option<Arc<dyn ChatProvider>> {
        self.providers.get(&kind).cloned()
    }

    pub fn contains(&self, kind: ProviderKind) -> bool {
        self.providers.contains_key(&kind)
    }

    /// Registered kinds, sorted
    pub fn kinds(&self) -> Vec<ProviderKind> {
        let mut kinds: Vec<_> = self.providers.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Display name of a provider, or its kind when unregistered
    pub fn display_name(&self, kind: ProviderKind) -> String {
        self.providers
            .get(&kind)
            .map(|p| p.display_name().to_string())
            .unwrap_or_else(|| kind.to_string())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
