//! Traits implemented by the geodata provider clients.

use async_trait::async_trait;

use crate::errors::GeoDataError;
use crate::models::{CandidatePoint, GeocodeResult, PageSummary};

/// Source of point of interest candidates and page-level enrichment data.
///
/// Every operation is stateless and makes exactly one attempt; errors are
/// surfaced to the caller without retrying.
#[async_trait]
pub trait EnrichmentProvider: Send + Sync {
    /// Candidate points of interest around a coordinate.
    ///
    /// `radius_meters` is a hint; implementations may clamp it to whatever
    /// the upstream service accepts.
    async fn find_near(
        &self,
        lat: f64,
        lng: f64,
        radius_meters: f64,
    ) -> Result<Vec<CandidatePoint>, GeoDataError>;

    /// Candidate points matching a free-text query.
    ///
    /// Results lacking coordinates are filtered out before returning.
    async fn search_by_text(&self, query: &str) -> Result<Vec<CandidatePoint>, GeoDataError>;

    /// Rich summary for a single page, addressed by title.
    async fn page_summary(&self, title: &str) -> Result<PageSummary, GeoDataError>;
}

/// Translates free-text location queries into coordinates.
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodeResult>, GeoDataError>;
}
