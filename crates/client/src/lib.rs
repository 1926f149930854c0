//! Waymark Client - support code for map frontends.
//!
//! The map renderer itself is an external collaborator; this crate holds
//! the pieces around it:
//!
//! - [`ApiClient`]: typed HTTP client for the Waymark server API
//! - [`BoundsTracker`]: debounced viewport-to-bounds tracking
//! - [`DisplaySet`]: the last-resolved-wins set of displayed landmarks
//! - [`FavoritesStore`]: locally persisted favorite landmarks
//! - [`distance_km`]: Haversine distance for "x km away" labels

pub mod api_client;
pub mod bounds_tracker;
pub mod distance;
pub mod errors;
pub mod favorites;

pub use api_client::ApiClient;
pub use bounds_tracker::{BoundsTracker, DisplaySet, Viewport};
pub use distance::{distance_km, format_distance};
pub use errors::ClientError;
pub use favorites::{FavoritesBackend, FavoritesStore, JsonFileBackend};
