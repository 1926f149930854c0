//! Landmark query service.
//!
//! Orchestrates the cache-or-fetch-and-backfill flow: the store is
//! consulted first, a miss falls through to the enrichment provider, and
//! freshly materialized landmarks are enriched by detached background
//! tasks that never gate the response.

use log::{debug, warn};
use std::sync::Arc;

use waymark_geodata::{CandidatePoint, EnrichmentProvider, PlaceKind, WikipediaProvider};

use super::landmarks_constants::{DEFAULT_RECENT_SEARCHES, MAX_MATERIALIZED_LANDMARKS};
use super::landmarks_model::{BoundingBox, Landmark, LandmarkUpdate, NewLandmark};
use super::landmarks_traits::{LandmarkRepositoryTrait, LandmarkServiceTrait};
use crate::errors::{Error, Result};
use crate::searches::{NewSearchLog, SearchLog, SearchLogRepositoryTrait};

/// Service for querying and materializing landmarks.
pub struct LandmarkService {
    repository: Arc<dyn LandmarkRepositoryTrait>,
    search_logs: Arc<dyn SearchLogRepositoryTrait>,
    enrichment: Arc<dyn EnrichmentProvider>,
}

impl LandmarkService {
    /// Creates a new LandmarkService instance.
    pub fn new(
        repository: Arc<dyn LandmarkRepositoryTrait>,
        search_logs: Arc<dyn SearchLogRepositoryTrait>,
        enrichment: Arc<dyn EnrichmentProvider>,
    ) -> Self {
        Self {
            repository,
            search_logs,
            enrichment,
        }
    }

    /// Insert one candidate as a landmark with immediately-available fields.
    fn materialize(&self, candidate: CandidatePoint, kind: PlaceKind) -> Result<Landmark> {
        let wikipedia_url = candidate
            .wikipedia_url
            .or_else(|| Some(WikipediaProvider::article_url(&candidate.title)));
        self.repository.insert(NewLandmark {
            title: candidate.title,
            description: candidate.summary,
            lat: candidate.lat,
            lng: candidate.lng,
            kind,
            wikipedia_url,
            wikipedia_page_id: candidate.wikipedia_page_id,
            image_url: candidate.image_url,
            opened: None,
            categories: vec![kind.to_string()],
        })
    }

    /// Detach a task that fetches a richer summary and merges it into the
    /// already-created record. Failures are logged and dropped; nothing
    /// here can affect the response the caller has in hand.
    fn spawn_backfill(&self, id: i64, title: String) {
        let enrichment = self.enrichment.clone();
        let repository = self.repository.clone();
        tokio::spawn(async move {
            match enrichment.page_summary(&title).await {
                Ok(summary) => {
                    let update = LandmarkUpdate {
                        description: summary.extract,
                        image_url: summary.thumbnail_url,
                        ..Default::default()
                    };
                    match repository.update(id, update) {
                        Ok(Some(_)) => debug!("Backfilled landmark {} ({})", id, title),
                        Ok(None) => warn!("Backfill target {} vanished", id),
                        Err(e) => warn!("Backfill update failed for {}: {}", title, e),
                    }
                }
                Err(e) => warn!("Backfill fetch failed for {}: {}", title, e),
            }
        });
    }

    /// Append a search log entry; a failure here never fails the request.
    fn log_search(&self, entry: NewSearchLog) {
        if let Err(e) = self.search_logs.append(entry) {
            warn!("Failed to log search: {}", e);
        }
    }
}

#[async_trait::async_trait]
impl LandmarkServiceTrait for LandmarkService {
    async fn landmarks_by_bounds(&self, bounds: BoundingBox) -> Result<Vec<Landmark>> {
        // Cache check: anything already inside the box answers the request.
        let cached = self.repository.find_by_bounds(&bounds)?;
        if !cached.is_empty() {
            debug!("Bounds cache hit: {} landmarks", cached.len());
            return Ok(cached);
        }

        let (center_lat, center_lng) = bounds.center();
        let radius = bounds.radius_meters();
        debug!(
            "Bounds cache miss, querying provider around ({}, {}) radius {}m",
            center_lat, center_lng, radius
        );

        let candidates = self
            .enrichment
            .find_near(center_lat, center_lng, radius)
            .await?;

        let mut created = Vec::new();
        for candidate in candidates.into_iter().take(MAX_MATERIALIZED_LANDMARKS) {
            // The nearby path classifies on title alone; the summary is a
            // one-liner not worth matching against.
            let kind = PlaceKind::classify(&candidate.title, None);
            let landmark = match self.materialize(candidate, kind) {
                Ok(landmark) => landmark,
                // Provider data that fails validation is not the caller's
                // fault; drop the candidate and keep going.
                Err(Error::Validation(msg)) => {
                    warn!("Skipping unusable provider candidate: {}", msg);
                    continue;
                }
                Err(e) => return Err(e),
            };
            self.spawn_backfill(landmark.id, landmark.title.clone());
            created.push(landmark);
        }

        self.log_search(NewSearchLog {
            query: format!(
                "bounds:{},{},{},{}",
                bounds.north, bounds.south, bounds.east, bounds.west
            ),
            lat: Some(center_lat),
            lng: Some(center_lng),
            radius: Some(radius),
            result_count: Some(created.len() as i64),
        });

        Ok(created)
    }

    async fn search_landmarks(
        &self,
        query: &str,
        lat: Option<f64>,
        lng: Option<f64>,
    ) -> Result<Vec<Landmark>> {
        if query.trim().is_empty() {
            return Err(Error::Validation("search query must not be empty".into()));
        }

        let local = self.repository.search_by_title(query)?;
        if !local.is_empty() {
            debug!("Search cache hit for '{}': {} landmarks", query, local.len());
            return Ok(local);
        }

        let candidates = self.enrichment.search_by_text(query).await?;

        let mut created = Vec::new();
        for candidate in candidates.into_iter().take(MAX_MATERIALIZED_LANDMARKS) {
            let kind = PlaceKind::classify(&candidate.title, candidate.summary.as_deref());
            let landmark = match self.materialize(candidate, kind) {
                Ok(landmark) => landmark,
                Err(Error::Validation(msg)) => {
                    warn!("Skipping unusable provider candidate: {}", msg);
                    continue;
                }
                Err(e) => return Err(e),
            };
            created.push(landmark);
        }

        self.log_search(NewSearchLog {
            query: query.to_string(),
            lat,
            lng,
            radius: None,
            result_count: Some(created.len() as i64),
        });

        Ok(created)
    }

    fn landmark(&self, id: i64) -> Result<Landmark> {
        self.repository
            .get(id)?
            .ok_or_else(|| Error::NotFound(format!("landmark {}", id)))
    }

    fn recent_searches(&self, limit: Option<usize>) -> Result<Vec<SearchLog>> {
        self.search_logs
            .recent(limit.unwrap_or(DEFAULT_RECENT_SEARCHES))
    }
}
