//! Fitted orbital coefficients for the low-order solar model.
//!
//! Accuracy is about one degree in elevation and azimuth. The coefficients
//! are treated as given physical constants of Earth's orbit; a different
//! fit can be supplied by building a custom [`SolarModel`].

use gnomon_angle::RAD_PER_DEG;

/// Anomalistic year (perihelion to perihelion) in days.
pub const ANOMALISTIC_YEAR_DAYS: f64 = 365.259_635_864;

/// Tropical year (equinox to equinox) in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.242_189_669_8;

/// Coefficients of the solar pipeline. All angles in radians, all rates in
/// radians per day of Julian time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarModel {
    /// Mean anomaly at the reference epoch.
    pub g0: f64,
    /// Mean anomaly rate: one turn per anomalistic year.
    pub g1: f64,
    /// Obliquity of the ecliptic at the reference epoch.
    pub e0: f64,
    /// Obliquity drift per day (small, negative).
    pub e1: f64,
    /// Mean longitude at the reference epoch.
    pub q0: f64,
    /// Mean longitude rate: one turn per tropical year.
    pub q1: f64,
    /// First equation-of-center amplitude.
    pub l0: f64,
    /// Second equation-of-center amplitude.
    pub l1: f64,
}

impl SolarModel {
    /// The standard fit.
    pub const STANDARD: SolarModel = SolarModel {
        g0: 357.5291 * RAD_PER_DEG,
        g1: 360.0 / ANOMALISTIC_YEAR_DAYS * RAD_PER_DEG,
        e0: 23.439 * RAD_PER_DEG,
        e1: -0.000_000_36 * RAD_PER_DEG,
        q0: 280.459 * RAD_PER_DEG,
        q1: 360.0 / TROPICAL_YEAR_DAYS * RAD_PER_DEG,
        l0: 1.915 * RAD_PER_DEG,
        l1: 0.020 * RAD_PER_DEG,
    };
}

impl Default for SolarModel {
    fn default() -> Self {
        Self::STANDARD
    }
}
