use async_trait::async_trait;

use super::landmarks_model::{BoundingBox, Landmark, LandmarkUpdate, NewLandmark};
use crate::errors::Result;
use crate::searches::SearchLog;

/// Trait for landmark store operations.
///
/// The store exclusively owns all landmark records; callers mutate only
/// through `insert` and `update`. Lookups by unknown id are `Ok(None)`,
/// never an error.
pub trait LandmarkRepositoryTrait: Send + Sync {
    fn get(&self, id: i64) -> Result<Option<Landmark>>;
    fn insert(&self, new_landmark: NewLandmark) -> Result<Landmark>;
    fn update(&self, id: i64, update: LandmarkUpdate) -> Result<Option<Landmark>>;
    fn find_by_bounds(&self, bounds: &BoundingBox) -> Result<Vec<Landmark>>;
    fn search_by_title(&self, text: &str) -> Result<Vec<Landmark>>;
}

/// Trait for landmark query service operations.
#[async_trait]
pub trait LandmarkServiceTrait: Send + Sync {
    /// Cached landmarks within the box, or freshly materialized ones on a
    /// cache miss.
    async fn landmarks_by_bounds(&self, bounds: BoundingBox) -> Result<Vec<Landmark>>;

    /// Locally matching landmarks, or provider search results on a miss.
    async fn search_landmarks(
        &self,
        query: &str,
        lat: Option<f64>,
        lng: Option<f64>,
    ) -> Result<Vec<Landmark>>;

    /// A single landmark by id; `NotFound` if absent.
    fn landmark(&self, id: i64) -> Result<Landmark>;

    /// Most recent search log entries, newest first.
    fn recent_searches(&self, limit: Option<usize>) -> Result<Vec<SearchLog>>;
}
