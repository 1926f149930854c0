//! Nominatim (OpenStreetMap) geocoding provider implementation.
//!
//! Free-text location search, limited to 5 matches per query. Nominatim's
//! usage policy requires an identifying User-Agent on every request.
//!
//! API documentation: https://nominatim.org/release-docs/latest/api/Search/

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::classify_transport_error;
use super::traits::GeocodeProvider;
use crate::errors::GeoDataError;
use crate::models::GeocodeResult;

const BASE_URL: &str = "https://nominatim.openstreetmap.org";
const PROVIDER_ID: &str = "NOMINATIM";
const USER_AGENT: &str = concat!("waymark/", env!("CARGO_PKG_VERSION"));

/// Maximum matches requested per query.
const RESULT_LIMIT: u32 = 5;

/// One entry of the Nominatim search response array.
///
/// Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchItem {
    display_name: String,
    lat: String,
    lon: String,
    #[serde(rename = "type")]
    kind: Option<String>,
    importance: Option<f64>,
}

/// Nominatim geocoding client.
pub struct NominatimProvider {
    client: Client,
    base_url: String,
}

impl Default for NominatimProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl NominatimProvider {
    /// Create a new client against the public endpoint.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }
}

#[async_trait]
impl GeocodeProvider for NominatimProvider {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodeResult>, GeoDataError> {
        let url = format!("{}/search", self.base_url);

        debug!(query, "Nominatim search request");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("format", "json".to_string()),
                ("q", query.to_string()),
                ("limit", RESULT_LIMIT.to_string()),
                ("addressdetails", "1".to_string()),
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

        let items: Vec<SearchItem> =
            response
                .json()
                .await
                .map_err(|e| GeoDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Failed to parse response: {}", e),
                })?;

        let results = items
            .into_iter()
            .filter_map(|item| {
                let lat = item.lat.parse::<f64>().ok()?;
                let lng = item.lon.parse::<f64>().ok()?;
                Some(GeocodeResult {
                    display_name: item.display_name,
                    lat,
                    lng,
                    kind: item.kind,
                    importance: item.importance,
                })
            })
            .collect();

        Ok(results)
    }
}
