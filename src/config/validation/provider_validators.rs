//! Provider configuration validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::{debug, warn};
use url::Url;

impl Validate for ProviderConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating provider configuration: {}", self.name);

        if self.name.trim().is_empty() {
            return Err("Provider name cannot be empty".to_string());
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("Provider {} base URL is invalid: {}", self.name, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Provider {} base URL must use http or https, got {}",
                self.name,
                url.scheme()
            ));
        }

        if self.timeout == 0 {
            return Err(format!("Provider {} timeout must be greater than 0", self.name));
        }

        if self.timeout > 300 {
            return Err(format!("Provider {} timeout should not exceed 300 seconds", self.name));
        }

        if self.models.iter().any(|m| m.trim().is_empty()) {
            return Err(format!("Provider {} has an empty model name", self.name));
        }

        if !self.has_api_key() {
            warn!("Provider {} has no API key; its requests will fail", self.name);
        }

        Ok(())
    }
}

impl Validate for ProvidersConfig {
    fn validate(&self) -> Result<(), String> {
        self.general.validate()?;
        self.search.validate()
    }
}
