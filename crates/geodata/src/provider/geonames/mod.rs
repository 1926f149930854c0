//! GeoNames nearby-Wikipedia provider implementation.
//!
//! Uses the `findNearbyWikipediaJSON` endpoint to list points of interest
//! with encyclopedia articles around a coordinate. The free tier requires
//! a registered username and caps the search radius at 20 km.
//!
//! API documentation: https://www.geonames.org/export/wikipedia-webservice.html

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::classify_transport_error;
use crate::errors::GeoDataError;
use crate::models::CandidatePoint;

const BASE_URL: &str = "http://api.geonames.org";
const PROVIDER_ID: &str = "GEONAMES";

/// Maximum search radius accepted by the free tier, in kilometres.
const MAX_RADIUS_KM: f64 = 20.0;

/// Maximum rows requested per call.
const MAX_ROWS: u32 = 50;

// ============================================================================
// API Response Structures
// ============================================================================

/// Response from /findNearbyWikipediaJSON
#[derive(Debug, Deserialize)]
struct NearbyResponse {
    #[serde(default)]
    geonames: Vec<NearbyEntry>,
    /// Present only on errors (GeoNames reports failures with HTTP 200)
    status: Option<StatusBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NearbyEntry {
    #[serde(default)]
    title: String,
    lat: Option<f64>,
    lng: Option<f64>,
    summary: Option<String>,
    /// Article URL without a scheme, e.g. "en.wikipedia.org/wiki/Alcatraz"
    wikipedia_url: Option<String>,
    wikipedia_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StatusBlock {
    message: Option<String>,
    value: Option<i64>,
}

// ============================================================================
// GeoNamesProvider
// ============================================================================

/// GeoNames nearby-article client.
pub struct GeoNamesProvider {
    client: Client,
    base_url: String,
    username: String,
}

impl GeoNamesProvider {
    /// Create a new GeoNames client for the given account username.
    pub fn new(username: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: BASE_URL.to_string(),
            username,
        }
    }

    /// Points of interest with Wikipedia articles around a coordinate.
    ///
    /// The radius is clamped to the 20 km the free tier accepts. Entries
    /// without a title or coordinates are dropped.
    pub async fn find_nearby(
        &self,
        lat: f64,
        lng: f64,
        radius_meters: f64,
    ) -> Result<Vec<CandidatePoint>, GeoDataError> {
        let radius_km = (radius_meters / 1000.0).min(MAX_RADIUS_KM);
        let url = format!("{}/findNearbyWikipediaJSON", self.base_url);

        debug!(lat, lng, radius_km, "GeoNames findNearbyWikipedia request");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lng", lng.to_string()),
                ("radius", radius_km.to_string()),
                ("maxRows", MAX_ROWS.to_string()),
                ("username", self.username.clone()),
            ])
            .send()
            .await
            .map_err(|e| classify_transport_error(e, PROVIDER_ID))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(GeoDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeoDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        let parsed: NearbyResponse =
            response
                .json()
                .await
                .map_err(|e| GeoDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Failed to parse response: {}", e),
                })?;

        // GeoNames signals quota and credential problems inside a 200 body.
        if let Some(status) = parsed.status {
            return Err(GeoDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!(
                    "GeoNames status {}: {}",
                    status.value.unwrap_or_default(),
                    status.message.unwrap_or_default()
                ),
            });
        }

        let candidates = parsed
            .geonames
            .into_iter()
            .filter_map(|entry| {
                let (lat, lng) = match (entry.lat, entry.lng) {
                    (Some(lat), Some(lng)) => (lat, lng),
                    _ => return None,
                };
                if entry.title.is_empty() {
                    return None;
                }
                Some(CandidatePoint {
                    title: entry.title,
                    lat,
                    lng,
                    summary: entry.summary,
                    image_url: None,
                    wikipedia_url: entry.wikipedia_url,
                    wikipedia_page_id: entry.wikipedia_id,
                })
            })
            .collect();

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nearby_response() {
        let body = r#"{
            "geonames": [
                {
                    "title": "Alcatraz Island",
                    "summary": "Alcatraz Island is located in San Francisco Bay.",
                    "lat": 37.8267,
                    "lng": -122.4233,
                    "wikipediaUrl": "en.wikipedia.org/wiki/Alcatraz_Island"
                },
                {
                    "title": "",
                    "lat": 37.0,
                    "lng": -122.0
                },
                {
                    "title": "No coordinates"
                }
            ]
        }"#;

        let parsed: NearbyResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.geonames.len(), 3);
        assert!(parsed.status.is_none());

        let entry = &parsed.geonames[0];
        assert_eq!(entry.title, "Alcatraz Island");
        assert_eq!(entry.lat, Some(37.8267));
        assert_eq!(
            entry.wikipedia_url.as_deref(),
            Some("en.wikipedia.org/wiki/Alcatraz_Island")
        );
    }

    #[test]
    fn parses_error_status_block() {
        let body = r#"{"status": {"message": "user does not exist.", "value": 10}}"#;
        let parsed: NearbyResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.geonames.is_empty());
        let status = parsed.status.unwrap();
        assert_eq!(status.value, Some(10));
    }
}
