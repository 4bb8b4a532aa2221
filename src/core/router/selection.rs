//! Model and provider selection

use crate::core::classifier::{QueryClassification, QueryType};
use crate::core::providers::ProviderKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How the model is asked to approach an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReasoningHint {
    #[default]
    Balanced,
    Creative,
    StepByStep,
    Thorough,
    Concise,
}

impl std::fmt::Display for ReasoningHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReasoningHint::Balanced => write!(f, "balanced"),
            ReasoningHint::Creative => write!(f, "creative"),
            ReasoningHint::StepByStep => write!(f, "step_by_step"),
            ReasoningHint::Thorough => write!(f, "thorough"),
            ReasoningHint::Concise => write!(f, "concise"),
        }
    }
}

/// Model settings for one query type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub primary_model: String,
    #[serde(default)]
    pub fallback_models: Vec<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    #[serde(default)]
    pub reasoning_hint: ReasoningHint,
}

impl ModelConfig {
    fn new(
        primary: &str,
        fallbacks: &[&str],
        max_tokens: u32,
        temperature: f32,
        reasoning_hint: ReasoningHint,
    ) -> Self {
        Self {
            primary_model: primary.to_string(),
            fallback_models: fallbacks.iter().map(|m| m.to_string()).collect(),
            max_tokens,
            temperature,
            reasoning_hint,
        }
    }

    /// Primary model followed by the fallbacks
    pub fn models(&self) -> Vec<String> {
        std::iter::once(self.primary_model.clone())
            .chain(self.fallback_models.iter().cloned())
            .collect()
    }

    /// Built-in settings for a query type
    pub fn builtin(query_type: QueryType) -> Self {
        match query_type {
            QueryType::General => Self::new(
                "gpt-4o-mini",
                &["gpt-4o", "gpt-3.5-turbo"],
                1000,
                0.7,
                ReasoningHint::Balanced,
            ),
            QueryType::Creative => {
                Self::new("gpt-4o", &["gpt-4o-mini"], 1500, 0.9, ReasoningHint::Creative)
            }
            QueryType::Analytical => {
                Self::new("gpt-4o", &["gpt-4o-mini"], 2000, 0.3, ReasoningHint::StepByStep)
            }
            QueryType::Research => {
                Self::new("gpt-4o", &["gpt-4o-mini"], 2000, 0.4, ReasoningHint::Thorough)
            }
            QueryType::News => {
                Self::new("gpt-4o-mini", &["gpt-4o"], 1000, 0.3, ReasoningHint::Concise)
            }
        }
    }
}

/// Model settings per query type
#[derive(Debug, Clone, PartialEq)]
pub struct ModelTable {
    by_type: HashMap<QueryType, ModelConfig>,
    /// Used for types missing from `by_type`
    general: ModelConfig,
}

impl Default for ModelTable {
    fn default() -> Self {
        Self {
            by_type: QueryType::ALL
                .iter()
                .map(|t| (*t, ModelConfig::builtin(*t)))
                .collect(),
            general: ModelConfig::builtin(QueryType::General),
        }
    }
}

impl ModelTable {
    /// Built-in table with configured entries replacing built-in ones
    pub fn with_overrides(overrides: &HashMap<QueryType, ModelConfig>) -> Self {
        let mut table = Self::default();
        for (query_type, config) in overrides {
            table.set(*query_type, config.clone());
        }
        table
    }

    pub fn set(&mut self, query_type: QueryType, config: ModelConfig) {
        if query_type == QueryType::General {
            self.general = config.clone();
        }
        self.by_type.insert(query_type, config);
    }

    /// Settings for a query type, or the general entry
    pub fn config_for(&self, query_type: QueryType) -> &ModelConfig {
        self.by_type.get(&query_type).unwrap_or(&self.general)
    }
}

/// An explicit provider wins; otherwise web-search queries go to the search
/// provider and everything else to the general one
pub fn select_provider(
    classification: &QueryClassification,
    force_provider: Option<ProviderKind>,
) -> ProviderKind {
    if let Some(provider) = force_provider {
        return provider;
    }
    if classification.needs_web_search {
        ProviderKind::Search
    } else {
        ProviderKind::General
    }
}
