//! Wikipedia REST API provider implementation.
//!
//! Two endpoints are used:
//! - `/page/search` for full-text page search (limit 20)
//! - `/page/summary/{title}` for descriptive metadata and coordinates
//!
//! API documentation: https://en.wikipedia.org/api/rest_v1/

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use super::classify_transport_error;
use crate::errors::GeoDataError;
use crate::models::{CandidatePoint, PageSummary};

const BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1";
const PROVIDER_ID: &str = "WIKIPEDIA";

/// Maximum search results requested per query.
const SEARCH_LIMIT: u32 = 20;

// ============================================================================
// API Response Structures
// ============================================================================

/// Response from /page/search
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    pages: Vec<SearchPage>,
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    id: Option<i64>,
    title: String,
}

/// Response from /page/summary/{title}
#[derive(Debug, Deserialize)]
struct SummaryResponse {
    extract: Option<String>,
    thumbnail: Option<Thumbnail>,
    coordinates: Option<Coordinates>,
    content_urls: Option<ContentUrls>,
    pageid: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Coordinates {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct ContentUrls {
    desktop: Option<DesktopUrls>,
}

#[derive(Debug, Deserialize)]
struct DesktopUrls {
    page: Option<String>,
}

impl From<SummaryResponse> for PageSummary {
    fn from(summary: SummaryResponse) -> Self {
        let (lat, lng) = match summary.coordinates {
            Some(c) => (Some(c.lat), Some(c.lon)),
            None => (None, None),
        };
        Self {
            extract: summary.extract,
            thumbnail_url: summary.thumbnail.and_then(|t| t.source),
            page_url: summary.content_urls.and_then(|u| u.desktop).and_then(|d| d.page),
            page_id: summary.pageid,
            lat,
            lng,
        }
    }
}

// ============================================================================
// WikipediaProvider
// ============================================================================

/// Wikipedia REST API client.
pub struct WikipediaProvider {
    client: Client,
    base_url: String,
}

impl Default for WikipediaProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl WikipediaProvider {
    /// Create a new client against the production endpoint.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Canonical article URL for a page title.
    pub fn article_url(title: &str) -> String {
        format!("https://en.wikipedia.org/wiki/{}", urlencoding::encode(title))
    }

    /// Full-text page search, resolved to candidates with coordinates.
    ///
    /// Each search hit costs one extra summary request to learn whether
    /// the page is about a physical place; pages without coordinates are
    /// dropped, and a failed summary lookup skips that page only.
    pub async fn search_places(&self, query: &str) -> Result<Vec<CandidatePoint>, GeoDataError> {
        let url = format!("{}/page/search", self.base_url);

        debug!(query, "Wikipedia page search request");

        let response = self
            .client
            .get(&url)
            .query(&[("q", query.to_string()), ("limit", SEARCH_LIMIT.to_string())])
            .send()
            .await
            .map_err(|e| classify_transport_error(e, PROVIDER_ID))?;

        let parsed: SearchResponse = Self::read_json(response).await?;

        let mut candidates = Vec::new();
        for page in parsed.pages {
            let summary = match self.page_summary(&page.title).await {
                Ok(summary) => summary,
                Err(e) => {
                    warn!(title = %page.title, error = %e, "Skipping search result");
                    continue;
                }
            };
            let (lat, lng) = match (summary.lat, summary.lng) {
                (Some(lat), Some(lng)) => (lat, lng),
                _ => continue,
            };
            candidates.push(CandidatePoint {
                wikipedia_url: summary
                    .page_url
                    .or_else(|| Some(Self::article_url(&page.title))),
                wikipedia_page_id: page.id.or(summary.page_id),
                title: page.title,
                lat,
                lng,
                summary: summary.extract,
                image_url: summary.thumbnail_url,
            });
        }

        Ok(candidates)
    }

    /// Summary metadata for a single page title.
    pub async fn page_summary(&self, title: &str) -> Result<PageSummary, GeoDataError> {
        let url = format!(
            "{}/page/summary/{}",
            self.base_url,
            urlencoding::encode(title)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| classify_transport_error(e, PROVIDER_ID))?;

        let parsed: SummaryResponse = Self::read_json(response).await?;
        Ok(parsed.into())
    }

    async fn read_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GeoDataError> {
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
        response.json().await.map_err(|e| GeoDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: format!("Failed to parse response: {}", e),
        })
    }
}
