//! Helper functions for creating and inspecting errors

use super::recovery::Retryable;
use super::types::RelayError;
use crate::core::providers::{ErrorKind, ProviderError};
use std::time::Duration;

impl RelayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn cache<S: Into<String>>(message: S) -> Self {
        Self::Cache(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    /// Error kind used for metrics and retry decisions
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Provider(err) => err.kind(),
            Self::HttpClient(err) if err.is_timeout() => ErrorKind::Timeout,
            Self::HttpClient(err) if err.is_connect() || err.is_request() => ErrorKind::Network,
            Self::Serialization(_) | Self::Yaml(_) => ErrorKind::ParseError,
            _ => ErrorKind::Unexpected,
        }
    }

    /// The provider error behind this error, if any
    pub fn as_provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::Provider(err) => Some(err),
            _ => None,
        }
    }
}

impl Retryable for RelayError {
    fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }

    fn retry_after(&self) -> Option<Duration> {
        self.as_provider_error().and_then(Retryable::retry_after)
    }
}
