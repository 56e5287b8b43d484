//! Estimating Earth's circumference from two simultaneous sun elevations.
//!
//! Two observers on (nearly) the same meridian measure the sun at the same
//! instant. The difference of their elevations is the arc of the meridian
//! between them, so `circumference = baseline · 2π / Δelevation`.

use gnomon_time::DayNumber;
use log::debug;

use crate::error::SolarError;
use crate::location::GeoLocation;
use crate::model::SolarModel;

/// Modern equatorial circumference of the Earth in km.
pub const EARTH_CIRCUMFERENCE_KM: f64 = 40_075.017;

/// Two observing sites, the ground distance between them, and the instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EratosthenesSetup {
    /// Site nearer the subsolar point.
    pub site_a: GeoLocation,
    /// Site farther from the subsolar point.
    pub site_b: GeoLocation,
    /// Ground distance between the sites in km.
    pub baseline_km: f64,
    /// Julian time of the simultaneous observation.
    pub jt: f64,
}

impl EratosthenesSetup {
    /// Syene and Alexandria at the 2019 June solstice noon, 912.017 km apart.
    pub fn classic() -> Self {
        Self {
            // Aswan's longitude with the modern Tropic of Cancer latitude
            site_a: GeoLocation::new(23.43679, 32.899722),
            site_b: GeoLocation::new(31.2, 29.916667),
            baseline_km: 912.017,
            jt: DayNumber::from_epoch_ms(CLASSIC_SOLSTICE_MS).days(),
        }
    }
}

/// `2019-06-21T11:49:03+0200`.
const CLASSIC_SOLSTICE_MS: i64 = 1_561_110_543_000;

/// Result of [`estimate_circumference`]. Angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircumferenceEstimate {
    pub elevation_a: f64,
    pub elevation_b: f64,
    /// `elevation_a - elevation_b`.
    pub difference: f64,
    pub circumference_km: f64,
    /// Absolute error against [`EARTH_CIRCUMFERENCE_KM`], in percent.
    pub error_pct: f64,
}

impl SolarModel {
    /// Estimate Earth's circumference from the elevations at both sites.
    pub fn estimate_circumference(
        &self,
        setup: &EratosthenesSetup,
    ) -> Result<CircumferenceEstimate, SolarError> {
        let elevation_a = self.position(setup.jt, &setup.site_a).elevation;
        let elevation_b = self.position(setup.jt, &setup.site_b).elevation;
        let difference = elevation_a - elevation_b;
        if difference == 0.0 || !difference.is_finite() {
            return Err(SolarError::DegenerateGeometry(
                "sites see the sun at the same elevation",
            ));
        }
        let circumference_km = setup.baseline_km * std::f64::consts::TAU / difference;
        let error_pct =
            (circumference_km - EARTH_CIRCUMFERENCE_KM).abs() / EARTH_CIRCUMFERENCE_KM * 100.0;
        debug!("elevations {elevation_a} / {elevation_b} rad -> {circumference_km:.0} km");
        Ok(CircumferenceEstimate {
            elevation_a,
            elevation_b,
            difference,
            circumference_km,
            error_pct,
        })
    }
}

/// Estimate with the standard model.
pub fn estimate_circumference(
    setup: &EratosthenesSetup,
) -> Result<CircumferenceEstimate, SolarError> {
    SolarModel::STANDARD.estimate_circumference(setup)
}

/// Shadow length cast by a vertical gnomon of unit height.
///
/// `1 / tan(elevation)`, `+∞` with the sun on the horizon. `None` when the
/// sun is below it.
pub fn gnomon_shadow_ratio(elevation: f64) -> Option<f64> {
    if elevation < 0.0 {
        return None;
    }
    if elevation == 0.0 {
        return Some(f64::INFINITY);
    }
    Some(1.0 / elevation.tan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gnomon_time::parse_timestamp;

    #[test]
    fn classic_instant_literal() {
        assert_eq!(
            parse_timestamp("2019-06-21T11:49:03+0200").unwrap(),
            CLASSIC_SOLSTICE_MS
        );
    }

    #[test]
    fn syene_sun_is_overhead() {
        let est = estimate_circumference(&EratosthenesSetup::classic()).unwrap();
        assert!((est.elevation_a.to_degrees() - 90.0).abs() < 0.5);
        assert!((est.elevation_b.to_degrees() - 81.8).abs() < 0.5);
    }

    #[test]
    fn classic_estimate_within_twenty_percent() {
        let est = estimate_circumference(&EratosthenesSetup::classic()).unwrap();
        assert!(est.error_pct < 20.0, "{est:?}");
        assert!(
            (est.circumference_km - EARTH_CIRCUMFERENCE_KM).abs() < 0.2 * EARTH_CIRCUMFERENCE_KM
        );
    }

    #[test]
    fn same_site_is_degenerate() {
        let mut setup = EratosthenesSetup::classic();
        setup.site_b = setup.site_a;
        assert!(matches!(
            estimate_circumference(&setup),
            Err(SolarError::DegenerateGeometry(_))
        ));
    }

    #[test]
    fn shadow_ratio() {
        let r = gnomon_shadow_ratio(std::f64::consts::FRAC_PI_4).unwrap();
        assert!((r - 1.0).abs() < 1e-12);
        assert_eq!(gnomon_shadow_ratio(0.0), Some(f64::INFINITY));
        assert!(gnomon_shadow_ratio(-0.1).is_none());
        let alexandria = gnomon_shadow_ratio(81.8_f64.to_radians()).unwrap();
        assert!((alexandria - 0.144).abs() < 0.01);
    }
}
