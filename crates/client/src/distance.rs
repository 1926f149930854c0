//! Haversine distance for landmark display.

/// Mean Earth radius, in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates, in kilometers.
pub fn distance_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Render a distance the way the UI shows it: meters below one
/// kilometer, one decimal below ten, whole kilometers beyond.
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * 1000.0).round() as i64)
    } else if km < 10.0 {
        format!("{:.1} km", (km * 10.0).round() / 10.0)
    } else {
        format!("{} km", km.round() as i64)
    }
}
