//! Reduction of unbounded angles into a single turn.
//!
//! The solar pipeline returns unbounded angles (hour angle,
//! sidereal angle, raw azimuth). These helpers are what callers apply before
//! display. All of them correct negative inputs by adding a full turn.

use std::f64::consts::TAU;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-15 + 360.0 rounds to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to [0, 2π) radians.
pub fn normalize_tau(rad: f64) -> f64 {
    let r = rad % TAU;
    let r = if r < 0.0 { r + TAU } else { r };
    if r >= TAU { 0.0 } else { r }
}

/// Wrap an angle in degrees to (-180, 180].
///
/// Useful for signed differences between two directions.
pub fn wrap_180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_reduction_table() {
        let cases = [
            (0.0, 0.0),
            (359.25, 359.25),
            (360.0, 0.0),
            (-0.75, 359.25),
            (1080.5, 0.5),
            (-721.0, 359.0),
        ];
        for (input, want) in cases {
            let got = normalize_360(input);
            assert!((got - want).abs() < 1e-9, "{input} -> {got}");
        }
    }

    #[test]
    fn upper_bound_is_never_returned() {
        for &tiny in &[-1e-15, -1e-14, -f64::EPSILON, -f64::MIN_POSITIVE] {
            let deg = normalize_360(tiny);
            assert!(deg < 360.0, "{tiny} -> {deg}");
            let rad = normalize_tau(tiny);
            assert!(rad < TAU, "{tiny} -> {rad}");
        }
        assert_eq!(normalize_360(-1e-15), 0.0);
        assert_eq!(normalize_tau(-1e-17), 0.0);
    }

    #[test]
    fn tau_range() {
        for &r in &[-100.0, -TAU, -0.5, 0.0, 1.0, TAU, 7.0, 1.0e6] {
            let n = normalize_tau(r);
            assert!((0.0..TAU).contains(&n), "{r} -> {n}");
        }
        assert!((normalize_tau(-0.5) - (TAU - 0.5)).abs() < 1e-12);
        assert!((normalize_tau(3.0 * TAU + 1.25) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn hour_angles_reduce_like_degrees() {
        // -1799.69777 rad is the sidereal angle at the 1999 March equinox
        let rad = normalize_tau(-1799.69777);
        let deg = normalize_360((-1799.69777_f64).to_degrees());
        assert!((rad.to_degrees() - deg).abs() < 1e-9);
    }

    #[test]
    fn wrap_signed() {
        assert!((wrap_180(190.0) + 170.0).abs() < 1e-12);
        assert!((wrap_180(-190.0) - 170.0).abs() < 1e-12);
        assert!((wrap_180(180.0) - 180.0).abs() < 1e-12);
        assert!((wrap_180(359.5) + 0.5).abs() < 1e-12);
    }
}
