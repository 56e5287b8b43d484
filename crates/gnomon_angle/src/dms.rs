//! Display formatting for angles.

use crate::units::to_degrees;

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// True when the angle is below zero.
    pub negative: bool,
    /// Whole degrees.
    pub degrees: u32,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Split a decimal-degree angle into sign, degrees, minutes and seconds.
///
/// Works from the total arc-second count so the three fields always sum
/// back to `|deg|`.
pub fn deg_to_dms(deg: f64) -> Dms {
    let total_seconds = deg.abs() * 3600.0;
    let whole_minutes = (total_seconds / 60.0).floor();
    let degrees = (whole_minutes / 60.0).floor();
    Dms {
        negative: deg < 0.0,
        degrees: degrees as u32,
        minutes: (whole_minutes - degrees * 60.0) as u8,
        seconds: (total_seconds - whole_minutes * 60.0).max(0.0),
    }
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.negative { "-" } else { "+" };
        write!(
            f,
            "{sign}{}° {:02}' {:04.1}\"",
            self.degrees, self.minutes, self.seconds
        )
    }
}

/// Format an angle given in radians as decimal degrees with `precision`
/// digits after the point.
pub fn format_degrees(rad: f64, precision: usize) -> String {
    format!("{:.*}", precision, to_degrees(rad))
}
