//! Error types for the market data crate.
//!
//! Transport failures are reported to callers as-is. This crate never
//! retries; classification only helps callers decide how to present them.

use thiserror::Error;

/// Errors that can occur while talking to a remote coin data provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider answered with a non-success status.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider does not know the requested resource (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to parse {provider} response: {message}")]
    Parse {
        /// The provider whose payload was malformed
        provider: String,
        /// Decoder message
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Whether a later identical request could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::RateLimited { .. } | Self::Timeout { .. } | Self::Network(_) => true,
            Self::ProviderError { .. } | Self::NotFound(_) | Self::Parse { .. } => false,
        }
    }
}
