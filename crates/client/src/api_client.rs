//! HTTP client for the Waymark server API.

use std::time::Duration;

use log::debug;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use waymark_core::landmarks::{BoundingBox, Landmark};
use waymark_geodata::GeocodeResult;

use crate::errors::ClientError;

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Typed client for the server's REST endpoints.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given server base URL (no trailing slash).
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client, base_url }
    }

    /// Landmarks within a bounding box.
    pub async fn landmarks_by_bounds(
        &self,
        bounds: &BoundingBox,
    ) -> Result<Vec<Landmark>, ClientError> {
        let url = format!("{}/api/landmarks/bounds", self.base_url);
        self.get_json(
            self.client.get(&url).query(&[
                ("north", bounds.north),
                ("south", bounds.south),
                ("east", bounds.east),
                ("west", bounds.west),
            ]),
        )
        .await
    }

    /// Landmarks matching a text query.
    pub async fn search(
        &self,
        query: &str,
        lat: Option<f64>,
        lng: Option<f64>,
    ) -> Result<Vec<Landmark>, ClientError> {
        let url = format!("{}/api/landmarks/search", self.base_url);
        let mut request = self.client.get(&url).query(&[("query", query)]);
        if let Some(lat) = lat {
            request = request.query(&[("lat", lat)]);
        }
        if let Some(lng) = lng {
            request = request.query(&[("lng", lng)]);
        }
        self.get_json(request).await
    }

    /// A single landmark by id.
    pub async fn landmark(&self, id: i64) -> Result<Landmark, ClientError> {
        let url = format!("{}/api/landmarks/{}", self.base_url, id);
        self.get_json(self.client.get(&url)).await
    }

    /// Geocoding matches for a free-text location query.
    pub async fn geocode(&self, query: &str) -> Result<Vec<GeocodeResult>, ClientError> {
        let url = format!("{}/api/geocode", self.base_url);
        self.get_json(self.client.get(&url).query(&[("q", query)]))
            .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        debug!("API response: {}", status);

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| status.to_string());
        match status {
            StatusCode::BAD_REQUEST => Err(ClientError::Validation(message)),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
            _ => Err(ClientError::Upstream(message)),
        }
    }
}
