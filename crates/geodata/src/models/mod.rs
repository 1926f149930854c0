//! Data models shared by the geodata providers.

mod candidate;
mod geocode;
mod kind;

pub use candidate::{CandidatePoint, PageSummary};
pub use geocode::GeocodeResult;
pub use kind::PlaceKind;
