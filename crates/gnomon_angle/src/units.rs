//! Degree ↔ radian conversion.

use std::f64::consts::PI;

/// Radians in one degree (π / 180).
pub const RAD_PER_DEG: f64 = PI / 180.0;

/// Degrees in one radian (180 / π).
pub const DEG_PER_RAD: f64 = 180.0 / PI;

/// Convert degrees to radians.
///
/// Valid for every real input, including negative angles and angles past
/// a full turn. No reduction is applied.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * RAD_PER_DEG
}

/// Convert radians to degrees. Inverse of [`to_radians`].
pub fn to_degrees(radians: f64) -> f64 {
    radians * DEG_PER_RAD
}
