//! Noise classification for GPS journeys.
//!
//! The classifier is a single-pass heuristic, deliberately not a statistical
//! model: it computes the journey's average moving speed, then flags a point
//! as noise when the implied speed to **both** its neighbors exceeds
//! `average x ratio`. A spike toward only one neighbor is tolerated, since
//! the point could still be valid and the neighbor the broken one.

use log::debug;

use crate::GeoPoint;

/// Ratio used by the CLI when none is supplied. Hand-tuned against the
/// reference taxi dataset.
pub const DEFAULT_NOISE_RATIO: f64 = 1.34;

/// Outcome of classifying a journey: every input point lands in exactly one
/// of the two sequences, both in timestamp order.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Points retained as the cleaned route.
    pub kept: Vec<GeoPoint>,
    /// Points judged to be measurement noise.
    pub noise: Vec<GeoPoint>,
}

/// Partition a journey into kept and noise points.
///
/// The input does not need to be pre-sorted; points are stable-sorted by
/// timestamp first, so fixes sharing a timestamp keep their input order.
///
/// `ratio` scales the journey's average moving speed into the noise margin:
/// a transition is suspicious when its speed is strictly greater than
/// `average x ratio`. A transition exactly at the margin is not suspicious.
///
/// Degenerate journeys (empty, a single fix, or every fix at the same
/// location) contain no moving transition to average over, so everything is
/// kept.
///
/// # Example
/// ```
/// use routeclean::{classify, GeoPoint};
///
/// let points = vec![
///     GeoPoint::new(51.5074, -0.1278, 0),
///     GeoPoint::new(51.5075, -0.1279, 10),
/// ];
/// let result = classify(&points, 1.34);
/// assert_eq!(result.kept.len(), 2);
/// assert!(result.noise.is_empty());
/// ```
pub fn classify(points: &[GeoPoint], ratio: f64) -> Classification {
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| p.timestamp);

    // Average speed over moving transitions only. A zero-distance pair means
    // the vehicle stood still and contributes no sample.
    let speeds: Vec<f64> = sorted
        .windows(2)
        .filter(|w| w[0].distance_to(&w[1]) != 0.0)
        .map(|w| w[0].speed_to(&w[1]))
        .collect();

    if speeds.is_empty() {
        // The journey never moved (or has fewer than two fixes). Technically
        // every point is valid, so report no noise.
        return Classification {
            kept: sorted,
            noise: Vec::new(),
        };
    }

    let avg_speed = speeds.iter().sum::<f64>() / speeds.len() as f64;
    let noise_margin = avg_speed * ratio;
    debug!(
        "classify: {} points, avg speed {:.2} km/h, noise margin {:.2} km/h",
        sorted.len(),
        avg_speed,
        noise_margin
    );

    let mut result = Classification::default();

    for (i, current) in sorted.iter().enumerate() {
        let prev = if i > 0 { sorted.get(i - 1) } else { None };
        let next = sorted.get(i + 1);

        // Endpoints have a single neighbor, so one hot transition is enough
        // to flag them.
        let suspicious_prev = match prev {
            Some(p) => p.speed_to(current) > noise_margin,
            None => true,
        };
        let suspicious_next = match next {
            Some(n) => current.speed_to(n) > noise_margin,
            None => true,
        };

        if suspicious_prev && suspicious_next {
            result.noise.push(*current);
        } else {
            result.kept.push(*current);
        }
    }

    result
}
