//! Geographic utilities: great-circle distance on a spherical Earth.

use crate::GeoPoint;

/// Mean Earth radius in meters, used for all distance calculations.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance in meters between two fixes, on a sphere with the
/// given radius.
///
/// Spherical-Earth haversine. The error versus an ellipsoidal model is well
/// under 0.5%, which is negligible at journey scale.
pub fn haversine_distance_with_radius(p1: &GeoPoint, p2: &GeoPoint, radius: f64) -> f64 {
    let d_lat = (p2.latitude - p1.latitude).to_radians();
    let d_lon = (p2.longitude - p1.longitude).to_radians();

    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (radius * c).abs()
}

/// Great-circle distance in meters between two fixes on Earth.
pub fn haversine_distance(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    haversine_distance_with_radius(p1, p2, EARTH_RADIUS_METERS)
}

/// Total length of a route in meters, summed over consecutive fixes.
pub fn route_distance(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|w| haversine_distance(&w[0], &w[1]))
        .sum()
}
