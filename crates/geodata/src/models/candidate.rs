//! Provider-sourced candidate points and page summaries.

use serde::{Deserialize, Serialize};

/// A point of interest candidate returned by a provider.
///
/// Candidates always carry a title and coordinates; everything else is
/// best effort. GeoNames results usually have a short summary and no
/// image, Wikipedia search results carry the full summary payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePoint {
    pub title: String,
    pub lat: f64,
    pub lng: f64,
    pub summary: Option<String>,
    pub image_url: Option<String>,
    pub wikipedia_url: Option<String>,
    pub wikipedia_page_id: Option<i64>,
}

/// Descriptive metadata for a single encyclopedia page.
///
/// Used to backfill landmarks created from basic candidate data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub extract: Option<String>,
    pub thumbnail_url: Option<String>,
    pub page_url: Option<String>,
    pub page_id: Option<i64>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl PageSummary {
    /// Whether the page carries coordinates.
    pub fn has_coordinates(&self) -> bool {
        self.lat.is_some() && self.lng.is_some()
    }
}
