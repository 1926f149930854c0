//! Error types for the geodata crate.

use thiserror::Error;

/// Errors that can occur while talking to a geodata provider.
///
/// Every call is a single attempt; none of these variants trigger a retry.
#[derive(Error, Debug)]
pub enum GeoDataError {
    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The provider returned a non-success response or unusable payload.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
