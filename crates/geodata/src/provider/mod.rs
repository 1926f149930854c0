//! Provider clients and the traits they implement.

pub mod geonames;
pub mod nominatim;
mod places;
mod traits;
pub mod wikipedia;

pub use places::PlacesClient;
pub use traits::{EnrichmentProvider, GeocodeProvider};

use crate::errors::GeoDataError;

/// Map a reqwest transport failure onto the provider error taxonomy.
pub(crate) fn classify_transport_error(e: reqwest::Error, provider: &str) -> GeoDataError {
    if e.is_timeout() {
        GeoDataError::Timeout {
            provider: provider.to_string(),
        }
    } else {
        GeoDataError::Network(e)
    }
}
