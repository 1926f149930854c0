//! Waymark Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for the landmark browser:
//! the in-memory landmark store, the bounds/search query services with
//! their cache-or-fetch-and-backfill flow, and the search log. It is
//! transport-agnostic; the HTTP surface lives in the server app and the
//! provider clients in `waymark-geodata`.

pub mod errors;
pub mod landmarks;
pub mod searches;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
