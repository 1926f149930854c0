//! API router composition.

mod geocode;
mod health;
mod landmarks;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

/// The full application router.
pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(landmarks::router())
        .merge(geocode::router())
        .merge(health::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
