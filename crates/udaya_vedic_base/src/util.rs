//! Shared angle helpers for vedic calculations.

/// Tolerance (degrees) under which a longitude is treated as sitting exactly
/// on a division boundary.
pub const BOUNDARY_EPSILON_DEG: f64 = 1e-9;

/// Normalize an angle to [0, 360) degrees.
///
/// Constant time for any finite input. Tiny negative inputs whose remainder
/// rounds up to 360.0 map to 0.0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalized longitude expressed in arc-minutes, snapped onto the nearest
/// whole arc-minute when within [`BOUNDARY_EPSILON_DEG`] of it.
///
/// Every Vedic division used here (30 deg rashi, 13 deg 20' nakshatra,
/// 3 deg 20' pada) is a whole number of arc-minutes, so the snap removes the
/// binary rounding of values such as 360/27 without moving interior points.
pub fn boundary_arcminutes(deg: f64) -> f64 {
    let minutes = normalize_360(deg) * 60.0;
    let nearest = minutes.round();
    let snapped = if (minutes - nearest).abs() < BOUNDARY_EPSILON_DEG * 60.0 {
        nearest
    } else {
        minutes
    };
    if snapped >= 21_600.0 { 0.0 } else { snapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero() {
        assert_eq!(normalize_360(0.0), 0.0);
    }

    #[test]
    fn normalize_360_wraps() {
        assert_eq!(normalize_360(360.0), 0.0);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_large_magnitudes() {
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
        assert!((normalize_360(-370.0) - 350.0).abs() < 1e-10);
        let r = normalize_360(1.0e15 + 45.0);
        assert!((0.0..360.0).contains(&r));
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        let r = normalize_360(-1e-300);
        assert!((0.0..360.0).contains(&r), "r = {r}");
    }

    #[test]
    fn arcminutes_snap_to_nakshatra_boundary() {
        assert_eq!(boundary_arcminutes(360.0 / 27.0), 800.0);
        assert_eq!(boundary_arcminutes(40.0 / 3.0), 800.0);
    }

    #[test]
    fn arcminutes_keep_interior_points() {
        let m = boundary_arcminutes(29.999_999);
        assert!(m < 1800.0, "m = {m}");
        assert!((m - 1_799.999_94).abs() < 1e-6);
    }

    #[test]
    fn arcminutes_wrap_near_full_circle() {
        assert_eq!(boundary_arcminutes(360.0 - 1e-12), 0.0);
    }
}
