//! Provider error taxonomy
//!
//! Every upstream failure is classified into an [`ErrorKind`], which decides
//! retries, and an [`ErrorSeverity`], which decides how the failure is
//! phrased to the user.

use super::types::ProviderKind;
use crate::utils::error::Retryable;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Classification of an upstream failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Network,
    Timeout,
    RateLimited,
    ServerError,
    AuthError,
    ClientError,
    ParseError,
    Unexpected,
}

impl ErrorKind {
    /// Only transient failures are retried
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorKind::Network | ErrorKind::Timeout | ErrorKind::RateLimited | ErrorKind::ServerError
        )
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorKind::Network | ErrorKind::Timeout => ErrorSeverity::Low,
            ErrorKind::RateLimited | ErrorKind::ServerError => ErrorSeverity::Medium,
            ErrorKind::AuthError
            | ErrorKind::ClientError
            | ErrorKind::ParseError
            | ErrorKind::Unexpected => ErrorSeverity::High,
        }
    }

    /// Kind for a non-success HTTP status
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ErrorKind::AuthError,
            429 => ErrorKind::RateLimited,
            500..=599 => ErrorKind::ServerError,
            400..=499 => ErrorKind::ClientError,
            _ => ErrorKind::Unexpected,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Network => "network",
            ErrorKind::Timeout => "timeout",
            ErrorKind::RateLimited => "rate_limited",
            ErrorKind::ServerError => "server_error",
            ErrorKind::AuthError => "auth_error",
            ErrorKind::ClientError => "client_error",
            ErrorKind::ParseError => "parse_error",
            ErrorKind::Unexpected => "unexpected",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How bad a failure is from the user's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

/// Error returned by a chat provider
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    #[error("Network error for {provider}: {message}")]
    Network {
        provider: ProviderKind,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: ProviderKind,
        message: String,
    },

    #[error("Rate limit exceeded for {provider}: {message}")]
    RateLimit {
        provider: ProviderKind,
        message: String,
        /// Seconds from the `Retry-After` header, when sent
        retry_after: Option<u64>,
    },

    #[error("Server error {status} from {provider}: {message}")]
    ServerError {
        provider: ProviderKind,
        status: u16,
        message: String,
    },

    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: ProviderKind,
        message: String,
    },

    #[error("Invalid request for {provider} ({status}): {message}")]
    InvalidRequest {
        provider: ProviderKind,
        status: u16,
        message: String,
    },

    #[error("Response parsing error for {provider}: {message}")]
    ResponseParsing {
        provider: ProviderKind,
        message: String,
    },

    #[error("Error from {provider}: {message}")]
    Other {
        provider: ProviderKind,
        message: String,
    },
}

impl ProviderError {
    pub fn network(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    pub fn timeout(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    pub fn rate_limit(provider: ProviderKind, retry_after: Option<u64>) -> Self {
        Self::RateLimit {
            provider,
            message: "Rate limit exceeded".to_string(),
            retry_after,
        }
    }

    pub fn server_error(provider: ProviderKind, status: u16, message: impl Into<String>) -> Self {
        Self::ServerError {
            provider,
            status,
            message: message.into(),
        }
    }

    pub fn authentication(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    pub fn invalid_request(provider: ProviderKind, status: u16, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            provider,
            status,
            message: message.into(),
        }
    }

    pub fn response_parsing(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self::ResponseParsing {
            provider,
            message: message.into(),
        }
    }

    pub fn other(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self::Other {
            provider,
            message: message.into(),
        }
    }

    /// Map a non-success HTTP status and its body to an error
    pub fn from_http_status(provider: ProviderKind, status: u16, body: &str) -> Self {
        let message = if body.trim().is_empty() {
            format!("HTTP error {}", status)
        } else {
            body.trim().to_string()
        };

        match ErrorKind::from_status(status) {
            ErrorKind::AuthError => Self::authentication(provider, message),
            ErrorKind::RateLimited => Self::RateLimit {
                provider,
                message,
                retry_after: None,
            },
            ErrorKind::ServerError => Self::server_error(provider, status, message),
            ErrorKind::ClientError => Self::invalid_request(provider, status, message),
            _ => Self::other(provider, format!("Unexpected status {}: {}", status, message)),
        }
    }

    /// Map a transport failure; timeouts stay distinguishable from other network errors
    pub fn from_reqwest(provider: ProviderKind, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout(provider, err.to_string())
        } else if err.is_decode() {
            Self::response_parsing(provider, err.to_string())
        } else {
            Self::network(provider, err.to_string())
        }
    }

    /// Attach the `Retry-After` delay to a rate limit error
    pub fn with_retry_after(self, seconds: Option<u64>) -> Self {
        match self {
            Self::RateLimit {
                provider, message, ..
            } => Self::RateLimit {
                provider,
                message,
                retry_after: seconds,
            },
            other => other,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network { .. } => ErrorKind::Network,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::RateLimit { .. } => ErrorKind::RateLimited,
            Self::ServerError { .. } => ErrorKind::ServerError,
            Self::Authentication { .. } => ErrorKind::AuthError,
            Self::InvalidRequest { .. } => ErrorKind::ClientError,
            Self::ResponseParsing { .. } => ErrorKind::ParseError,
            Self::Other { .. } => ErrorKind::Unexpected,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        self.kind().severity()
    }

    pub fn provider(&self) -> ProviderKind {
        match self {
            Self::Network { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::RateLimit { provider, .. }
            | Self::ServerError { provider, .. }
            | Self::Authentication { provider, .. }
            | Self::InvalidRequest { provider, .. }
            | Self::ResponseParsing { provider, .. }
            | Self::Other { provider, .. } => *provider,
        }
    }

    /// HTTP status behind the error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerError { status, .. } | Self::InvalidRequest { status, .. } => Some(*status),
            Self::RateLimit { .. } => Some(429),
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.kind().is_retryable()
    }
}

impl Retryable for ProviderError {
    fn is_retryable(&self) -> bool {
        ProviderError::is_retryable(self)
    }

    fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimit {
                retry_after: Some(seconds),
                ..
            } => Some(Duration::from_secs(*seconds)),
            _ => None,
        }
    }
}
