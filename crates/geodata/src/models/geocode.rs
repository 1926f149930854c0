//! Geocoding result model.

use serde::{Deserialize, Serialize};

/// A single geocoding match for a free-text location query.
///
/// Field names mirror the shape the HTTP API exposes, which in turn
/// follows the Nominatim response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeocodeResult {
    pub display_name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub importance: Option<f64>,
}
