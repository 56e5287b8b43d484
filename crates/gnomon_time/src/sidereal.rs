//! Sidereal angle: Earth's rotational phase relative to the distant stars.
//!
//! A linear model in Julian time. Results are unbounded;
//! callers that need a single turn reduce with
//! [`gnomon_angle::normalize_tau`].

use std::f64::consts::PI;

use gnomon_angle::{normalize_tau, to_radians};

/// Greenwich sidereal angle at the reference epoch (18.697374558 h), radians.
pub const GMST0: f64 = 18.697_374_558 * PI / 12.0;

/// Sidereal rotation rate (24.06570982441908 h per day), radians per day.
///
/// Slightly more than one turn per day because a sidereal day is shorter
/// than a solar day.
pub const GMST1: f64 = 24.065_709_824_419_08 * PI / 12.0;

/// Greenwich mean sidereal angle for a Julian time, in radians.
///
/// `gmst = GMST0 + GMST1 · jt`
pub fn greenwich_sidereal_angle(jt: f64) -> f64 {
    GMST0 + GMST1 * jt
}

/// Local mean sidereal angle at an east-positive longitude, in radians.
///
/// `lst = gmst + longitude`. At longitude 0 this is exactly the Greenwich
/// angle.
pub fn local_sidereal_angle(jt: f64, longitude_deg: f64) -> f64 {
    greenwich_sidereal_angle(jt) + to_radians(longitude_deg)
}

/// Local sidereal time in hours, reduced to [0, 24).
pub fn local_sidereal_hours(jt: f64, longitude_deg: f64) -> f64 {
    let hours = normalize_tau(local_sidereal_angle(jt, longitude_deg)) * 12.0 / PI;
    if hours >= 24.0 { 0.0 } else { hours }
}
