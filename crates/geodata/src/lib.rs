//! Waymark Geodata Crate
//!
//! Provider clients for the third-party services the landmark browser
//! leans on:
//!
//! - GeoNames `findNearbyWikipediaJSON` for points of interest around a
//!   coordinate,
//! - the Wikipedia REST API for full-text page search and page summaries,
//! - Nominatim (OpenStreetMap) for free-text geocoding.
//!
//! Each client is stateless and makes a single attempt per call; there is
//! no retry or circuit-breaking layer. Failures surface as
//! [`GeoDataError`] and the caller decides what to do with them.
//!
//! # Core Types
//!
//! - [`CandidatePoint`] - a provider-sourced point of interest candidate
//! - [`PageSummary`] - descriptive metadata for a single encyclopedia page
//! - [`GeocodeResult`] - a geocoding match for a free-text query
//! - [`PlaceKind`] - the fixed landmark classification set

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::GeoDataError;
pub use models::{CandidatePoint, GeocodeResult, PageSummary, PlaceKind};
pub use provider::geonames::GeoNamesProvider;
pub use provider::nominatim::NominatimProvider;
pub use provider::wikipedia::WikipediaProvider;
pub use provider::{EnrichmentProvider, GeocodeProvider, PlacesClient};
