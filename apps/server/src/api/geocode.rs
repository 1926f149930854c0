//! Geocoding endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use waymark_geodata::GeocodeResult;

use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(Deserialize)]
struct GeocodeParams {
    q: Option<String>,
}

async fn geocode(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GeocodeParams>,
) -> ApiResult<Json<Vec<GeocodeResult>>> {
    let query = params
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::validation("q parameter is required"))?;

    let results = state.geocoder.geocode(query).await?;
    Ok(Json(results))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/geocode", get(geocode))
}
