//! Tests for the landmark query service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use waymark_geodata::{
    CandidatePoint, EnrichmentProvider, GeoDataError, PageSummary, PlaceKind,
};

use super::landmarks_model::{BoundingBox, NewLandmark};
use super::landmarks_service::LandmarkService;
use super::landmarks_store::MemoryLandmarkRepository;
use super::landmarks_traits::{LandmarkRepositoryTrait, LandmarkServiceTrait};
use crate::errors::Error;
use crate::searches::{MemorySearchLogRepository, SearchLogRepositoryTrait};

/// Scripted provider that counts calls instead of touching the network.
struct FakeEnrichment {
    candidates: Vec<CandidatePoint>,
    summary: Option<PageSummary>,
    fail: bool,
    find_near_calls: AtomicUsize,
    search_calls: AtomicUsize,
    summary_calls: AtomicUsize,
}

impl FakeEnrichment {
    fn returning(candidates: Vec<CandidatePoint>) -> Self {
        Self {
            candidates,
            summary: None,
            fail: false,
            find_near_calls: AtomicUsize::new(0),
            search_calls: AtomicUsize::new(0),
            summary_calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        let mut fake = Self::returning(Vec::new());
        fake.fail = true;
        fake
    }

    fn with_summary(mut self, summary: PageSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    fn provider_error() -> GeoDataError {
        GeoDataError::ProviderError {
            provider: "FAKE".to_string(),
            message: "scripted failure".to_string(),
        }
    }
}

#[async_trait]
impl EnrichmentProvider for FakeEnrichment {
    async fn find_near(
        &self,
        _lat: f64,
        _lng: f64,
        _radius_meters: f64,
    ) -> Result<Vec<CandidatePoint>, GeoDataError> {
        self.find_near_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Self::provider_error());
        }
        Ok(self.candidates.clone())
    }

    async fn search_by_text(&self, _query: &str) -> Result<Vec<CandidatePoint>, GeoDataError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Self::provider_error());
        }
        Ok(self.candidates.clone())
    }

    async fn page_summary(&self, _title: &str) -> Result<PageSummary, GeoDataError> {
        self.summary_calls.fetch_add(1, Ordering::SeqCst);
        match &self.summary {
            Some(summary) => Ok(summary.clone()),
            None => Err(Self::provider_error()),
        }
    }
}

fn candidate(title: &str, lat: f64, lng: f64) -> CandidatePoint {
    CandidatePoint {
        title: title.to_string(),
        lat,
        lng,
        summary: None,
        image_url: None,
        wikipedia_url: None,
        wikipedia_page_id: None,
    }
}

struct Fixture {
    repository: Arc<MemoryLandmarkRepository>,
    search_logs: Arc<MemorySearchLogRepository>,
    enrichment: Arc<FakeEnrichment>,
    service: LandmarkService,
}

fn fixture(enrichment: FakeEnrichment) -> Fixture {
    let repository = Arc::new(MemoryLandmarkRepository::new());
    let search_logs = Arc::new(MemorySearchLogRepository::new());
    let enrichment = Arc::new(enrichment);
    let service = LandmarkService::new(
        repository.clone(),
        search_logs.clone(),
        enrichment.clone(),
    );
    Fixture {
        repository,
        search_logs,
        enrichment,
        service,
    }
}

fn unit_box() -> BoundingBox {
    BoundingBox::new(1.0, 0.0, 1.0, 0.0).unwrap()
}

/// Poll until `check` passes or a second elapses.
async fn wait_for(mut check: impl FnMut() -> bool) {
    for _ in 0..100 {
        if check() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not met within timeout");
}

// ==================== Bounds pipeline ====================

#[tokio::test]
async fn cache_hit_never_calls_the_provider() {
    let f = fixture(FakeEnrichment::returning(vec![candidate("Unused", 0.5, 0.5)]));
    f.repository
        .insert(NewLandmark {
            title: "Cached".to_string(),
            lat: 0.5,
            lng: 0.5,
            ..Default::default()
        })
        .unwrap();

    let result = f.service.landmarks_by_bounds(unit_box()).await.unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Cached");
    assert_eq!(f.enrichment.find_near_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn cache_miss_materializes_candidates_and_logs_the_search() {
    let f = fixture(FakeEnrichment::returning(vec![
        candidate("City Museum and Park", 0.2, 0.2),
        candidate("Old Oak Bridge", 0.4, 0.4),
        candidate("Miller Homestead", 0.6, 0.6),
    ]));

    let result = f.service.landmarks_by_bounds(unit_box()).await.unwrap();
    assert_eq!(result.len(), 3);
    // Keyword precedence: museum beats park.
    assert_eq!(result[0].kind, PlaceKind::Museums);
    assert_eq!(result[1].kind, PlaceKind::Architecture);
    assert_eq!(result[2].kind, PlaceKind::HistoricalSites);
    assert_eq!(result[0].categories, vec!["Museums".to_string()]);
    // Materialized candidates get a derived article URL.
    assert!(result[0]
        .wikipedia_url
        .as_deref()
        .unwrap()
        .contains("City%20Museum%20and%20Park"));

    let logs = f.search_logs.recent(10).unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].query, "bounds:1,0,1,0");
    assert_eq!(logs[0].result_count, Some(3));
    assert_eq!(logs[0].lat, Some(0.5));
    assert!(logs[0].radius.is_some());
}

#[tokio::test]
async fn materialization_is_capped() {
    let many: Vec<CandidatePoint> = (0..35)
        .map(|i| candidate(&format!("Site {}", i), 0.5, 0.5))
        .collect();
    let f = fixture(FakeEnrichment::returning(many));

    let result = f.service.landmarks_by_bounds(unit_box()).await.unwrap();
    assert_eq!(result.len(), super::landmarks_constants::MAX_MATERIALIZED_LANDMARKS);
}

#[tokio::test]
async fn unusable_candidates_are_skipped_without_failing_the_request() {
    let f = fixture(FakeEnrichment::returning(vec![
        candidate("Good Site", 0.2, 0.2),
        candidate("Broken Site", 95.0, 0.4),
        candidate("Another Good Site", 0.6, 0.6),
    ]));

    let result = f.service.landmarks_by_bounds(unit_box()).await.unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].title, "Good Site");
    assert_eq!(result[1].title, "Another Good Site");

    // The surviving candidates are stored and the search is logged with
    // their count, not the provider's.
    assert_eq!(f.repository.find_by_bounds(&unit_box()).unwrap().len(), 2);
    let logs = f.search_logs.recent(10).unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].result_count, Some(2));
}

#[tokio::test]
async fn search_also_skips_unusable_candidates() {
    let f = fixture(FakeEnrichment::returning(vec![
        candidate("Sunken Pier", 0.0, -181.0),
        candidate("Standing Pier", 0.1, 0.1),
    ]));

    let result = f.service.search_landmarks("pier", None, None).await.unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].title, "Standing Pier");
}

#[tokio::test]
async fn provider_failure_propagates_and_stores_nothing() {
    let f = fixture(FakeEnrichment::failing());

    let err = f.service.landmarks_by_bounds(unit_box()).await.unwrap_err();
    assert!(matches!(err, Error::GeoData(_)));
    assert!(f.repository.find_by_bounds(&unit_box()).unwrap().is_empty());
    assert!(f.search_logs.recent(10).unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn backfill_enriches_created_landmarks() {
    let f = fixture(
        FakeEnrichment::returning(vec![candidate("Sutro Baths", 0.5, 0.5)]).with_summary(
            PageSummary {
                extract: Some("Ruins of a swimming complex".to_string()),
                thumbnail_url: Some("https://example.org/sutro.jpg".to_string()),
                ..Default::default()
            },
        ),
    );

    let result = f.service.landmarks_by_bounds(unit_box()).await.unwrap();
    let id = result[0].id;
    assert!(result[0].description.is_none());

    let repository = f.repository.clone();
    wait_for(move || {
        repository
            .get(id)
            .unwrap()
            .and_then(|l| l.description)
            .is_some()
    })
    .await;

    let enriched = f.repository.get(id).unwrap().unwrap();
    assert_eq!(
        enriched.description.as_deref(),
        Some("Ruins of a swimming complex")
    );
    assert_eq!(
        enriched.image_url.as_deref(),
        Some("https://example.org/sutro.jpg")
    );
    assert_eq!(enriched.id, result[0].id);
    assert_eq!(enriched.created_at, result[0].created_at);
}

#[tokio::test(flavor = "multi_thread")]
async fn backfill_failure_never_affects_the_response() {
    // No scripted summary: every backfill fetch fails.
    let f = fixture(FakeEnrichment::returning(vec![candidate("Lone Pine", 0.5, 0.5)]));

    let result = f.service.landmarks_by_bounds(unit_box()).await.unwrap();
    assert_eq!(result.len(), 1);

    let enrichment = f.enrichment.clone();
    wait_for(move || enrichment.summary_calls.load(Ordering::SeqCst) > 0).await;
    tokio::time::sleep(Duration::from_millis(20)).await;

    let stored = f.repository.get(result[0].id).unwrap().unwrap();
    assert!(stored.description.is_none());
}

// ==================== Search pipeline ====================

#[tokio::test]
async fn local_search_hit_never_calls_the_provider() {
    let f = fixture(FakeEnrichment::returning(Vec::new()));
    f.repository
        .insert(NewLandmark {
            title: "Ferry Building".to_string(),
            lat: 37.79,
            lng: -122.39,
            ..Default::default()
        })
        .unwrap();

    let result = f.service.search_landmarks("ferry", None, None).await.unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(f.enrichment.search_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn search_miss_materializes_enriched_candidates() {
    let mut enriched = candidate("Legion of Honor", 37.78, -122.5);
    enriched.summary = Some("An art museum in Lincoln Park".to_string());
    enriched.image_url = Some("https://example.org/legion.jpg".to_string());
    let f = fixture(FakeEnrichment::returning(vec![enriched]));

    let result = f
        .service
        .search_landmarks("legion", Some(37.7), Some(-122.4))
        .await
        .unwrap();
    assert_eq!(result.len(), 1);
    // Description feeds classification on the text path.
    assert_eq!(result[0].kind, PlaceKind::Museums);
    assert_eq!(
        result[0].image_url.as_deref(),
        Some("https://example.org/legion.jpg")
    );

    let logs = f.search_logs.recent(10).unwrap();
    assert_eq!(logs[0].query, "legion");
    assert_eq!(logs[0].lat, Some(37.7));
    assert_eq!(logs[0].radius, None);
}

#[tokio::test]
async fn empty_query_is_a_validation_error() {
    let f = fixture(FakeEnrichment::returning(Vec::new()));
    let err = f.service.search_landmarks("  ", None, None).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(f.enrichment.search_calls.load(Ordering::SeqCst), 0);
}

// ==================== Point lookup ====================

#[tokio::test]
async fn unknown_id_is_not_found() {
    let f = fixture(FakeEnrichment::returning(Vec::new()));
    assert!(matches!(f.service.landmark(404), Err(Error::NotFound(_))));
}

#[tokio::test]
async fn recent_searches_passes_through_default_limit() {
    let f = fixture(FakeEnrichment::returning(Vec::new()));
    for i in 0..15 {
        f.search_logs
            .append(crate::searches::NewSearchLog {
                query: format!("q{}", i),
                ..Default::default()
            })
            .unwrap();
    }
    assert_eq!(f.service.recent_searches(None).unwrap().len(), 10);
    assert_eq!(f.service.recent_searches(Some(3)).unwrap().len(), 3);
}
