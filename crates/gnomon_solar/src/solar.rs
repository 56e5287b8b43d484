//! The solar position pipeline.
//!
//! Formulas are evaluated in dependency order:
//!
//! mean anomaly → obliquity → ecliptic longitude → right ascension →
//! sin(declination) → hour angle → elevation / azimuth
//!
//! Every step takes Julian time `jt` (days past J2000.0, see
//! [`gnomon_time::from_calendar`]); the last three also take the observer's
//! latitude and east-positive longitude in degrees. All returned angles are
//! radians. Angles that grow with time (mean anomaly, longitude, hour angle,
//! raw azimuth) are not reduced; use [`gnomon_angle::normalize_tau`] before
//! display.
//!
//! Each method on [`SolarModel`] has a free-function twin bound to
//! [`SolarModel::STANDARD`].

use std::f64::consts::PI;

use gnomon_angle::{normalize_tau, to_radians};
use gnomon_time::local_sidereal_angle;
use log::warn;

use crate::model::SolarModel;

/// `cos(declination)` below which the azimuth tangent term is treated as
/// singular.
const SINGULAR_COS_DEC: f64 = 1e-12;

impl SolarModel {
    /// Mean anomaly: `g = G0 + G1·jt`.
    pub fn mean_anomaly(&self, jt: f64) -> f64 {
        self.g0 + self.g1 * jt
    }

    /// Obliquity of the ecliptic: `ob = E0 + E1·jt`.
    pub fn obliquity(&self, jt: f64) -> f64 {
        self.e0 + self.e1 * jt
    }

    /// Solar ecliptic longitude measured from the vernal equinox.
    ///
    /// `l = Q0 + Q1·jt + L0·sin(g) + L1·sin(2g)`
    pub fn ecliptic_longitude(&self, jt: f64) -> f64 {
        let g = self.mean_anomaly(jt);
        self.q0 + self.q1 * jt + self.l0 * g.sin() + self.l1 * (2.0 * g).sin()
    }

    /// Right ascension in (-π, π].
    ///
    /// `ra = atan2(sin(l)·cos(ob), cos(l))`
    pub fn right_ascension(&self, jt: f64) -> f64 {
        right_ascension_of(self.ecliptic_longitude(jt), self.obliquity(jt))
    }

    /// Sine of the declination: `sin(l)·sin(ob)`.
    pub fn sin_declination(&self, jt: f64) -> f64 {
        self.ecliptic_longitude(jt).sin() * self.obliquity(jt).sin()
    }

    /// Cosine of the declination, always non-negative.
    pub fn cos_declination(&self, jt: f64) -> f64 {
        cos_from_sin(self.sin_declination(jt))
    }

    /// Tangent of the declination.
    ///
    /// Returns a directional infinity when `cos(declination)` is exactly
    /// zero. This cannot happen for Earth's obliquity, but custom models may
    /// drive it there.
    pub fn tan_declination(&self, jt: f64) -> f64 {
        let sin_dec = self.sin_declination(jt);
        tan_from_sin_cos(sin_dec, cos_from_sin(sin_dec))
    }

    /// Declination in [-π/2, π/2].
    pub fn declination(&self, jt: f64) -> f64 {
        clamped_asin(self.sin_declination(jt))
    }

    /// Hour angle: local sidereal angle minus right ascension.
    ///
    /// Zero at local solar noon. Unbounded.
    pub fn hour_angle(&self, jt: f64, lon_deg: f64) -> f64 {
        local_sidereal_angle(jt, lon_deg) - self.right_ascension(jt)
    }

    /// Sine of the solar elevation.
    ///
    /// `sin(lat)·sin(dec) + cos(lat)·cos(dec)·cos(ha)`
    pub fn sin_elevation(&self, jt: f64, lat_deg: f64, lon_deg: f64) -> f64 {
        let lat = to_radians(lat_deg);
        let sin_dec = self.sin_declination(jt);
        sin_elevation_of(lat, sin_dec, cos_from_sin(sin_dec), self.hour_angle(jt, lon_deg))
    }

    /// Solar elevation above the horizon, in [-π/2, π/2].
    pub fn elevation(&self, jt: f64, lat_deg: f64, lon_deg: f64) -> f64 {
        clamped_asin(self.sin_elevation(jt, lat_deg, lon_deg))
    }

    /// Raw solar azimuth, measured from north through east.
    ///
    /// `π + atan2(sin(ha), cos(ha)·sin(lat) − tan(dec)·cos(lat))`
    ///
    /// The value lies in [0, 2π] but is not reduced; see
    /// [`SolarModel::normalized_azimuth`].
    pub fn azimuth(&self, jt: f64, lat_deg: f64, lon_deg: f64) -> f64 {
        let lat = to_radians(lat_deg);
        let sin_dec = self.sin_declination(jt);
        azimuth_of(lat, sin_dec, cos_from_sin(sin_dec), self.hour_angle(jt, lon_deg))
    }

    /// Solar azimuth reduced to [0, 2π).
    pub fn normalized_azimuth(&self, jt: f64, lat_deg: f64, lon_deg: f64) -> f64 {
        normalize_tau(self.azimuth(jt, lat_deg, lon_deg))
    }
}

pub(crate) fn right_ascension_of(longitude: f64, obliquity: f64) -> f64 {
    (longitude.sin() * obliquity.cos()).atan2(longitude.cos())
}

/// `sqrt(1 − s²)`, with the radicand floored at zero.
pub(crate) fn cos_from_sin(sin: f64) -> f64 {
    (1.0 - sin * sin).max(0.0).sqrt()
}

pub(crate) fn tan_from_sin_cos(sin: f64, cos: f64) -> f64 {
    if cos < SINGULAR_COS_DEC {
        warn!("declination near ±90° (cos = {cos:e}); tangent term is singular");
    }
    if cos == 0.0 {
        return if sin < 0.0 { f64::NEG_INFINITY } else { f64::INFINITY };
    }
    sin / cos
}

/// `asin` with its argument clamped to [-1, 1] against rounding overshoot.
pub(crate) fn clamped_asin(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}

pub(crate) fn sin_elevation_of(lat: f64, sin_dec: f64, cos_dec: f64, ha: f64) -> f64 {
    lat.sin() * sin_dec + lat.cos() * cos_dec * ha.cos()
}

pub(crate) fn azimuth_of(lat: f64, sin_dec: f64, cos_dec: f64, ha: f64) -> f64 {
    let tan_dec = tan_from_sin_cos(sin_dec, cos_dec);
    let cos_lat = lat.cos();
    // inf · 0 would be NaN at the pole; the term vanishes there
    let dec_term = if cos_lat == 0.0 { 0.0 } else { tan_dec * cos_lat };
    PI + ha.sin().atan2(ha.cos() * lat.sin() - dec_term)
}

/// Mean anomaly with the standard model.
pub fn mean_anomaly(jt: f64) -> f64 {
    SolarModel::STANDARD.mean_anomaly(jt)
}

/// Obliquity of the ecliptic with the standard model.
pub fn obliquity(jt: f64) -> f64 {
    SolarModel::STANDARD.obliquity(jt)
}

/// Ecliptic longitude with the standard model.
pub fn ecliptic_longitude(jt: f64) -> f64 {
    SolarModel::STANDARD.ecliptic_longitude(jt)
}

/// Right ascension with the standard model.
pub fn right_ascension(jt: f64) -> f64 {
    SolarModel::STANDARD.right_ascension(jt)
}

/// Sine of the declination with the standard model.
pub fn sin_declination(jt: f64) -> f64 {
    SolarModel::STANDARD.sin_declination(jt)
}

/// Declination with the standard model.
pub fn declination(jt: f64) -> f64 {
    SolarModel::STANDARD.declination(jt)
}

/// Hour angle with the standard model.
pub fn hour_angle(jt: f64, lon_deg: f64) -> f64 {
    SolarModel::STANDARD.hour_angle(jt, lon_deg)
}

/// Sine of the elevation with the standard model.
pub fn sin_elevation(jt: f64, lat_deg: f64, lon_deg: f64) -> f64 {
    SolarModel::STANDARD.sin_elevation(jt, lat_deg, lon_deg)
}

/// Elevation with the standard model.
pub fn elevation(jt: f64, lat_deg: f64, lon_deg: f64) -> f64 {
    SolarModel::STANDARD.elevation(jt, lat_deg, lon_deg)
}

/// Raw azimuth with the standard model.
pub fn azimuth(jt: f64, lat_deg: f64, lon_deg: f64) -> f64 {
    SolarModel::STANDARD.azimuth(jt, lat_deg, lon_deg)
}

/// Azimuth in [0, 2π) with the standard model.
pub fn normalized_azimuth(jt: f64, lat_deg: f64, lon_deg: f64) -> f64 {
    SolarModel::STANDARD.normalized_azimuth(jt, lat_deg, lon_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gnomon_angle::{normalize_360, to_degrees, wrap_180};
    use gnomon_time::DayNumber;

    fn jt(s: &str) -> f64 {
        DayNumber::parse(s).unwrap().days()
    }

    fn cardinal_points() -> [f64; 4] {
        [
            jt("1999-03-21T01:46Z"),
            jt("1999-06-21T19:49Z"),
            jt("1999-09-23T11:32Z"),
            jt("1999-12-22T07:44Z"),
        ]
    }

    const EPS: f64 = 0.5 / 3600.0;

    fn angle_diff(a: f64, b: f64) -> f64 {
        let d = normalize_tau(a - b);
        d.min(std::f64::consts::TAU - d)
    }

    #[test]
    fn mean_anomaly_at_cardinal_points() {
        let expected = [1.312974, 2.908493, 4.519541, 6.064994];
        for (t, e) in cardinal_points().into_iter().zip(expected) {
            assert!((mean_anomaly(t) - e).abs() < EPS, "{}", mean_anomaly(t));
        }
    }

    #[test]
    fn obliquity_barely_moves() {
        let expected = [0.409089, 0.409088, 0.409088, 0.409087];
        for (t, e) in cardinal_points().into_iter().zip(expected) {
            assert!((obliquity(t) - e).abs() < EPS);
        }
    }

    #[test]
    fn longitude_at_cardinal_points() {
        for (i, t) in cardinal_points().into_iter().enumerate() {
            let expected = PI * 0.5 * i as f64;
            assert!(
                (ecliptic_longitude(t) - expected).abs() < EPS,
                "point {i}: {}",
                ecliptic_longitude(t)
            );
        }
    }

    #[test]
    fn longitude_advances_one_turn_per_tropical_year() {
        let t = jt("1999-03-21T01:46Z");
        let year = crate::model::TROPICAL_YEAR_DAYS;
        let a = ecliptic_longitude(t);
        let b = ecliptic_longitude(t + year);
        // Equation of center differs slightly because g drifts between years
        assert!((b - a - 2.0 * PI).abs() < 1e-3);
    }

    #[test]
    fn right_ascension_at_cardinal_points() {
        let expected = [0.0, PI * 0.5, -PI, -PI * 0.5];
        for (t, e) in cardinal_points().into_iter().zip(expected) {
            let ra = right_ascension(t);
            assert!(ra > -PI && ra <= PI);
            assert!(angle_diff(ra, e) < EPS, "{ra} vs {e}");
        }
    }

    #[test]
    fn sin_declination_extremes() {
        let max = 23.4_f64.to_radians().sin();
        let expected = [0.0, max, 0.0, -max];
        for (t, e) in cardinal_points().into_iter().zip(expected) {
            assert!((sin_declination(t) - e).abs() < 0.001);
        }
    }

    #[test]
    fn declination_matches_sine() {
        let t = jt("1999-06-21T19:49Z");
        let dec = declination(t);
        assert!((dec.sin() - sin_declination(t)).abs() < 1e-12);
        assert!((to_degrees(dec) - 23.44).abs() < 0.01);
        let m = SolarModel::STANDARD;
        assert!((m.tan_declination(t) - dec.tan()).abs() < 1e-12);
        assert!((m.cos_declination(t) - dec.cos()).abs() < 1e-12);
    }

    #[test]
    fn hour_angle_at_boston_noon() {
        let noon = jt("2023-12-14T11:38:35-05:00");
        let cases = [
            (-71.05, 0.0),    // Boston
            (-114.37, 316.0), // Yellowknife
            (31.23, 102.0),   // Cairo
            (91.17, 162.0),   // Lhasa
        ];
        for (lon, expected) in cases {
            let ha = normalize_360(to_degrees(hour_angle(noon, lon)));
            assert!(wrap_180(ha - expected).abs() < 1.0, "{lon}: {ha}");
        }
    }

    #[test]
    fn elevation_bounds_hold_everywhere() {
        let half_pi = PI / 2.0;
        for day in 0..24 {
            let t = -5000.0 + day as f64 * 431.7;
            for lat in [-90.0, -66.5, -23.4, 0.0, 42.35, 89.999, 90.0] {
                for lon in [-180.0, -71.05, 0.0, 106.816, 180.0] {
                    let e = elevation(t, lat, lon);
                    assert!((-half_pi..=half_pi).contains(&e), "{t} {lat} {lon}: {e}");
                    let a = normalized_azimuth(t, lat, lon);
                    assert!((0.0..std::f64::consts::TAU).contains(&a), "{a}");
                }
            }
        }
    }

    #[test]
    fn clamp_guards_asin() {
        assert_eq!(clamped_asin(1.0 + 1e-15), PI / 2.0);
        assert_eq!(clamped_asin(-1.0 - 1e-15), -PI / 2.0);
    }

    #[test]
    fn singular_tangent_is_directional_infinity() {
        assert_eq!(tan_from_sin_cos(1.0, 0.0), f64::INFINITY);
        assert_eq!(tan_from_sin_cos(-1.0, 0.0), f64::NEG_INFINITY);
        // Sun at the celestial pole: azimuth still finite
        let az = azimuth_of(0.5, 1.0, 0.0, 0.3);
        assert!(az.is_finite());
        let az = azimuth_of(PI / 2.0, 1.0, 0.0, 0.3);
        assert!(az.is_finite());
    }

    #[test]
    fn solar_noon_azimuth_points_south_in_the_north() {
        let noon = jt("2023-12-14T11:38:35-05:00");
        let az = to_degrees(normalized_azimuth(noon, 42.35, -71.05));
        assert!((az - 180.0).abs() < 1.0, "{az}");
    }

    #[test]
    fn custom_model_is_used() {
        let untilted = SolarModel {
            e0: 0.0,
            e1: 0.0,
            ..SolarModel::STANDARD
        };
        let t = jt("1999-06-21T19:49Z");
        assert_eq!(untilted.sin_declination(t), 0.0);
        assert_eq!(untilted.declination(t), 0.0);
    }
}
