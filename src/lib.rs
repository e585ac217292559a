//! # Route Clean
//!
//! GPS route cleaning library for vehicle journey data.
//!
//! This library provides:
//! - A `GeoPoint` value type with great-circle distance and speed calculations
//! - A single-pass noise classifier based on neighbor-to-neighbor speeds
//! - CSV adapters for reading and writing fix records
//!
//! A point is flagged as noise when the implied speed to **both** its previous
//! and next neighbor exceeds `average speed x ratio`, where the average is
//! taken over every moving transition in the journey. First and last points
//! have a single neighbor, so one suspicious transition is enough to flag
//! them.
//!
//! ## Quick Start
//!
//! ```rust
//! use routeclean::{classify, GeoPoint, DEFAULT_NOISE_RATIO};
//!
//! let points = vec![
//!     GeoPoint::new(51.5074, -0.1278, 0),
//!     GeoPoint::new(51.5080, -0.1290, 10),
//!     GeoPoint::new(51.5090, -0.1300, 20),
//! ];
//!
//! let result = classify(&points, DEFAULT_NOISE_RATIO);
//! assert_eq!(result.kept.len() + result.noise.len(), points.len());
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{Result, RouteCleanError};

// Geographic utilities (haversine distance, speed)
pub mod geo_utils;
pub use geo_utils::{haversine_distance, EARTH_RADIUS_METERS};

// Noise classification
pub mod classifier;
pub use classifier::{classify, Classification, DEFAULT_NOISE_RATIO};

// CSV adapters for fix records
pub mod io;
pub use io::{read_points, read_points_from_path, write_points, write_points_to_path};

// ============================================================================
// Core Types
// ============================================================================

/// A single recorded GPS fix: coordinates plus the time of observation.
///
/// Immutable once constructed; all derived quantities (radians, distances,
/// speeds) are computed on demand.
///
/// # Example
/// ```
/// use routeclean::GeoPoint;
/// let point = GeoPoint::new(51.5074, -0.1278, 1326378718); // London
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Unix timestamp (seconds since epoch, or any monotonic second unit)
    pub timestamp: i64,
}

impl GeoPoint {
    /// Create a new fix from latitude/longitude degrees and a timestamp.
    pub fn new(latitude: f64, longitude: f64, timestamp: i64) -> Self {
        Self {
            latitude,
            longitude,
            timestamp,
        }
    }

    /// Check if the point has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Great-circle distance in meters between this fix and another.
    ///
    /// Symmetric: `a.distance_to(&b) == b.distance_to(&a)`.
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        haversine_distance(self, other)
    }

    /// Average speed in km/h between this fix and a later one.
    ///
    /// Elapsed time is `other.timestamp - self.timestamp` (signed; callers
    /// pass points in chronological order). Returns 0.0 when the timestamps
    /// are equal, so duplicate-timestamp fixes read as stationary rather
    /// than infinitely fast.
    pub fn speed_to(&self, other: &GeoPoint) -> f64 {
        let elapsed = other.timestamp - self.timestamp;
        if elapsed == 0 {
            return 0.0;
        }

        // meters per second, then km/h
        let speed = self.distance_to(other) / elapsed as f64;
        speed * 3.6
    }

    /// The fix as a `(latitude, longitude, timestamp)` triple, in the same
    /// field order as the external record format.
    pub fn to_triple(&self) -> (f64, f64, i64) {
        (self.latitude, self.longitude, self.timestamp)
    }
}
