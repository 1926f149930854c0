//! Landmark endpoints.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use waymark_core::landmarks::{BoundingBox, Landmark};
use waymark_core::searches::SearchLog;

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

/// Parse the four required bounds edges out of the raw query string.
///
/// Validation happens before any store or provider access: a missing or
/// non-numeric edge is a 400, as is an inverted or out-of-range box.
fn parse_bounds(params: &HashMap<String, String>) -> Result<BoundingBox, ApiError> {
    let mut edges = [0.0f64; 4];
    for (slot, key) in edges.iter_mut().zip(["north", "south", "east", "west"]) {
        let raw = params
            .get(key)
            .ok_or_else(|| ApiError::validation(format!("missing bounds parameter '{}'", key)))?;
        *slot = raw
            .parse()
            .map_err(|_| ApiError::validation(format!("bounds parameter '{}' is not a number", key)))?;
    }
    let [north, south, east, west] = edges;
    Ok(BoundingBox::new(north, south, east, west)?)
}

async fn get_landmarks_by_bounds(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Vec<Landmark>>> {
    let bounds = parse_bounds(&params)?;
    let landmarks = state.landmark_service.landmarks_by_bounds(bounds).await?;
    Ok(Json(landmarks))
}

#[derive(Deserialize)]
struct SearchParams {
    query: Option<String>,
    lat: Option<f64>,
    lng: Option<f64>,
}

async fn search_landmarks(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<Landmark>>> {
    let query = params
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::validation("query parameter must not be empty"))?;

    let landmarks = state
        .landmark_service
        .search_landmarks(query, params.lat, params.lng)
        .await?;
    Ok(Json(landmarks))
}

async fn get_landmark(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Landmark>> {
    let landmark = state.landmark_service.landmark(id)?;
    Ok(Json(landmark))
}

#[derive(Deserialize)]
struct RecentParams {
    limit: Option<usize>,
}

async fn get_recent_searches(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RecentParams>,
) -> ApiResult<Json<Vec<SearchLog>>> {
    let logs = state.landmark_service.recent_searches(params.limit)?;
    Ok(Json(logs))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/landmarks/bounds", get(get_landmarks_by_bounds))
        .route("/landmarks/search", get(search_landmarks))
        .route("/landmarks/{id}", get(get_landmark))
        .route("/searches/recent", get(get_recent_searches))
}
