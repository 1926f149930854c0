//! Core error types for the Waymark application.
//!
//! Provider-specific errors (from the geodata crate) are wrapped here so
//! services expose a single error surface to the HTTP boundary.

use thiserror::Error;
use waymark_geodata::GeoDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the landmark browser.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or out-of-range request input. Maps to 400 at the boundary.
    #[error("Input validation failed: {0}")]
    Validation(String),

    /// A record addressed by id does not exist. Maps to 404 at the boundary.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A synchronous provider call failed. Maps to 500 at the boundary.
    #[error("Geodata operation failed: {0}")]
    GeoData(#[from] GeoDataError),

    /// A store operation failed (lock poisoning and the like).
    #[error("Repository error: {0}")]
    Repository(String),

    /// Anything that does not fit the categories above.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
