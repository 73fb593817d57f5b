//! Great-circle distance using the spherical law of cosines.
//!
//! The operation order below is fixed: conversions multiply before dividing
//! and the nautical-mile factor is applied last, so results are reproducible
//! to the last bit across runs.

use std::f64::consts::PI;

use crate::types::Coordinate;

/// One nautical mile per arc-minute of great circle.
const MINUTES_PER_DEGREE: f64 = 60.0;
const STATUTE_MILES_PER_NAUTICAL_MILE: f64 = 1.150_779;

/// Distance in statute miles between two coordinates.
#[must_use]
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    // sin²+cos² can round to 1 - ulp, which acos turns into a small nonzero arc.
    if a == b {
        return 0.0;
    }

    let long_delta = degrees_to_radians(b.longitude - a.longitude);
    let lat1 = degrees_to_radians(a.latitude);
    let lat2 = degrees_to_radians(b.latitude);

    let cosine = lat2.sin() * lat1.sin() + lat2.cos() * lat1.cos() * long_delta.cos();
    // Rounding can push the cosine just past 1.0 for near-identical points.
    let arc_degrees = radians_to_degrees(cosine.clamp(-1.0, 1.0).acos());

    arc_degrees * MINUTES_PER_DEGREE * STATUTE_MILES_PER_NAUTICAL_MILE
}

// Not f64::to_radians: that multiplies by a pre-divided constant, which
// rounds differently.
fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}
