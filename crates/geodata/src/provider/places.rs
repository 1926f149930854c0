//! Composite enrichment client.
//!
//! Candidates around a coordinate come from GeoNames; text search and
//! page summaries come from the Wikipedia REST API. This client stitches
//! the two together behind [`EnrichmentProvider`].

use async_trait::async_trait;

use super::geonames::GeoNamesProvider;
use super::traits::EnrichmentProvider;
use super::wikipedia::WikipediaProvider;
use crate::errors::GeoDataError;
use crate::models::{CandidatePoint, PageSummary};

/// Production [`EnrichmentProvider`] backed by GeoNames and Wikipedia.
pub struct PlacesClient {
    geonames: GeoNamesProvider,
    wikipedia: WikipediaProvider,
}

impl PlacesClient {
    /// Build a client using the given GeoNames account username.
    pub fn new(geonames_username: String) -> Self {
        Self {
            geonames: GeoNamesProvider::new(geonames_username),
            wikipedia: WikipediaProvider::new(),
        }
    }
}

#[async_trait]
impl EnrichmentProvider for PlacesClient {
    async fn find_near(
        &self,
        lat: f64,
        lng: f64,
        radius_meters: f64,
    ) -> Result<Vec<CandidatePoint>, GeoDataError> {
        self.geonames.find_nearby(lat, lng, radius_meters).await
    }

    async fn search_by_text(&self, query: &str) -> Result<Vec<CandidatePoint>, GeoDataError> {
        self.wikipedia.search_places(query).await
    }

    async fn page_summary(&self, title: &str) -> Result<PageSummary, GeoDataError> {
        self.wikipedia.page_summary(title).await
    }
}
