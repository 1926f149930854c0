//! Client-side error types.

use thiserror::Error;

/// Errors surfaced by the client support code.
///
/// The UI layer is expected to show a generic failure notification for
/// `Upstream`/`Network` and fall back to an empty result set rather than
/// blocking.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server rejected the request parameters (HTTP 400).
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The addressed record does not exist (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server or its upstream provider failed (HTTP 5xx).
    #[error("Server error: {0}")]
    Upstream(String),

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Local favorite persistence failed.
    #[error("Persistence error: {0}")]
    Persistence(String),
}
