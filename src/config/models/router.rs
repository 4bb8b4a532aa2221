//! Router configuration

use super::*;
use crate::core::providers::ProviderKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Router configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Providers tried after the selected one fails, per selected provider
    #[serde(default = "default_fallback_chain")]
    pub fallback_chain: HashMap<ProviderKind, Vec<ProviderKind>>,
    /// Maximum fallback providers tried after the selected one
    #[serde(default = "default_max_fallbacks")]
    pub max_fallbacks: usize,
    /// Maximum models tried per provider
    #[serde(default = "default_max_model_attempts")]
    pub max_model_attempts: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            fallback_chain: default_fallback_chain(),
            max_fallbacks: default_max_fallbacks(),
            max_model_attempts: default_max_model_attempts(),
        }
    }
}

impl RouterConfig {
    /// Fallbacks configured for a provider, empty when none
    pub fn fallbacks_for(&self, provider: ProviderKind) -> &[ProviderKind] {
        self.fallback_chain
            .get(&provider)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Search falls back to general; general has no fallback
pub fn default_fallback_chain() -> HashMap<ProviderKind, Vec<ProviderKind>> {
    HashMap::from([
        (ProviderKind::Search, vec![ProviderKind::General]),
        (ProviderKind::General, Vec::new()),
    ])
}
