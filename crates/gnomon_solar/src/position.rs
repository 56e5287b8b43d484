//! One-pass evaluation of the whole pipeline for an observer.

use gnomon_angle::{normalize_360, normalize_tau, to_degrees};
use log::trace;

use crate::location::GeoLocation;
use crate::model::SolarModel;
use crate::solar::{
    azimuth_of, clamped_asin, cos_from_sin, right_ascension_of, sin_elevation_of,
};

/// Every intermediate quantity of the pipeline at one instant and place.
///
/// All angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Julian time the position was evaluated at.
    pub jt: f64,
    pub mean_anomaly: f64,
    pub obliquity: f64,
    pub ecliptic_longitude: f64,
    /// In (-π, π].
    pub right_ascension: f64,
    pub sin_declination: f64,
    /// In [-π/2, π/2].
    pub declination: f64,
    /// Unbounded.
    pub hour_angle: f64,
    /// In [-π/2, π/2].
    pub elevation: f64,
    /// In [0, 2π).
    pub azimuth: f64,
}

impl SolarPosition {
    /// Elevation in degrees.
    pub fn elevation_deg(&self) -> f64 {
        to_degrees(self.elevation)
    }

    /// Azimuth in degrees, [0, 360).
    pub fn azimuth_deg(&self) -> f64 {
        normalize_360(to_degrees(self.azimuth))
    }

    /// Whether the sun's centre is above the geometric horizon.
    pub fn is_daylight(&self) -> bool {
        self.elevation > 0.0
    }
}

impl SolarModel {
    /// Evaluate the full pipeline once for `location` at Julian time `jt`.
    pub fn position(&self, jt: f64, location: &GeoLocation) -> SolarPosition {
        let mean_anomaly = self.mean_anomaly(jt);
        let obliquity = self.obliquity(jt);
        let ecliptic_longitude = self.ecliptic_longitude(jt);
        let right_ascension = right_ascension_of(ecliptic_longitude, obliquity);
        let sin_declination = ecliptic_longitude.sin() * obliquity.sin();
        let cos_declination = cos_from_sin(sin_declination);
        let hour_angle =
            gnomon_time::local_sidereal_angle(jt, location.longitude_deg) - right_ascension;

        let lat = location.latitude_rad();
        let elevation = clamped_asin(sin_elevation_of(
            lat,
            sin_declination,
            cos_declination,
            hour_angle,
        ));
        let azimuth = normalize_tau(azimuth_of(lat, sin_declination, cos_declination, hour_angle));

        trace!(
            "jt={jt} g={mean_anomaly} ob={obliquity} l={ecliptic_longitude} ra={right_ascension} \
             sin_dec={sin_declination} ha={hour_angle} el={elevation} az={azimuth}"
        );

        SolarPosition {
            jt,
            mean_anomaly,
            obliquity,
            ecliptic_longitude,
            right_ascension,
            sin_declination,
            declination: clamped_asin(sin_declination),
            hour_angle,
            elevation,
            azimuth,
        }
    }
}

/// Evaluate the full pipeline with the standard model.
pub fn sun_position(jt: f64, location: &GeoLocation) -> SolarPosition {
    SolarModel::STANDARD.position(jt, location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solar;
    use gnomon_time::DayNumber;

    #[test]
    fn matches_individual_formulas() {
        let jt = DayNumber::parse("2023-12-16T12:00:00-0500").unwrap().days();
        let loc = GeoLocation::new(42.35, -71.05);
        let p = sun_position(jt, &loc);
        assert_eq!(p.mean_anomaly, solar::mean_anomaly(jt));
        assert_eq!(p.obliquity, solar::obliquity(jt));
        assert_eq!(p.ecliptic_longitude, solar::ecliptic_longitude(jt));
        assert_eq!(p.right_ascension, solar::right_ascension(jt));
        assert_eq!(p.sin_declination, solar::sin_declination(jt));
        assert_eq!(p.hour_angle, solar::hour_angle(jt, -71.05));
        assert_eq!(p.elevation, solar::elevation(jt, 42.35, -71.05));
        assert_eq!(p.azimuth, solar::normalized_azimuth(jt, 42.35, -71.05));
    }

    #[test]
    fn boston_midday_in_december() {
        let jt = DayNumber::parse("2023-12-16T11:40:00-0500").unwrap().days();
        let p = sun_position(jt, &GeoLocation::new(42.35, -71.05));
        assert!(p.is_daylight());
        assert!((p.elevation_deg() - 24.3).abs() < 1.0, "{}", p.elevation_deg());
        assert!((p.azimuth_deg() - 180.0).abs() < 5.0, "{}", p.azimuth_deg());
    }

    #[test]
    fn boston_before_dawn() {
        let jt = DayNumber::parse("2023-12-16T05:30:00-0500").unwrap().days();
        let p = sun_position(jt, &GeoLocation::new(42.35, -71.05));
        assert!(!p.is_daylight());
        assert!((p.elevation_deg() - -17.1).abs() < 1.0);
    }
}
