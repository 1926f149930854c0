//! Constants for the landmarks module.

/// Approximate meters per degree of latitude, also used for longitude
/// before the cosine correction. A deliberate simplification inherited
/// from the search radius formula.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Cap on how many provider candidates are materialized per request.
/// Bounds response latency; anything beyond this is simply dropped.
pub const MAX_MATERIALIZED_LANDMARKS: usize = 20;

/// Default number of entries returned by the recent-searches lookup.
pub const DEFAULT_RECENT_SEARCHES: usize = 10;
