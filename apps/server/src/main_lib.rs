//! State construction and tracing setup.

use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use waymark_core::landmarks::{LandmarkService, LandmarkServiceTrait, MemoryLandmarkRepository};
use waymark_core::searches::MemorySearchLogRepository;
use waymark_geodata::{GeocodeProvider, NominatimProvider, PlacesClient};

use crate::config::Config;

/// Shared application state, created once at process start and passed by
/// reference to every request handler.
pub struct AppState {
    pub landmark_service: Arc<dyn LandmarkServiceTrait>,
    pub geocoder: Arc<dyn GeocodeProvider>,
}

/// Install the fmt tracing subscriber with env-filter control.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

/// Assemble the production state: in-memory stores plus the real
/// GeoNames/Wikipedia/Nominatim clients.
pub fn build_state(config: &Config) -> Arc<AppState> {
    let repository = Arc::new(MemoryLandmarkRepository::new());
    let search_logs = Arc::new(MemorySearchLogRepository::new());
    let enrichment = Arc::new(PlacesClient::new(config.geonames_username.clone()));

    let landmark_service = Arc::new(LandmarkService::new(repository, search_logs, enrichment));

    Arc::new(AppState {
        landmark_service,
        geocoder: Arc::new(NominatimProvider::new()),
    })
}
