//! Landmarks module - domain models, store, services, and traits.

mod landmarks_constants;
mod landmarks_model;
mod landmarks_service;
#[cfg(test)]
mod landmarks_service_tests;
mod landmarks_store;
mod landmarks_traits;

// Re-export the public interface
pub use landmarks_constants::*;
pub use landmarks_model::{BoundingBox, Landmark, LandmarkUpdate, NewLandmark};
pub use landmarks_service::LandmarkService;
pub use landmarks_store::MemoryLandmarkRepository;
pub use landmarks_traits::{LandmarkRepositoryTrait, LandmarkServiceTrait};
