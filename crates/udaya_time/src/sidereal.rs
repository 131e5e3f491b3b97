//! Greenwich and local mean sidereal time.
//!
//! Used to turn the Sun's right ascension into a local hour angle when
//! searching for sunrise and sunset. Functions take UT Julian Dates; the
//! engine does not model UT1-UTC (below one second), so civil UT is passed
//! straight through.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{J2000_JD, jd_to_centuries};

/// Arcseconds to radians.
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Sidereal rotations per solar day.
pub const SIDEREAL_RATE: f64 = 1.002_737_811_911_354_6;

/// Earth Rotation Angle in radians, [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    (TAU * (0.779_057_273_264_0 + SIDEREAL_RATE * du)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians, [0, 2π).
///
/// GMST = ERA + (0.014506 + 4612.156534 T + 1.3915817 T² − 0.00000044 T³
/// − 0.000029956 T⁴ − 0.0000000368 T⁵) arcsec.
pub fn gmst_rad(jd_ut: f64) -> f64 {
    let t = jd_to_centuries(jd_ut);
    let poly_arcsec = 0.014506
        + t * (4612.156534 + t * (1.3915817 + t * (-0.00000044 + t * (-0.000029956 - t * 0.0000000368))));
    (earth_rotation_angle_rad(jd_ut) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local mean sidereal time in radians for an east-positive longitude.
pub fn local_sidereal_time_rad(jd_ut: f64, longitude_deg: f64) -> f64 {
    (gmst_rad(jd_ut) + longitude_deg.to_radians()).rem_euclid(TAU)
}

/// Local hour angle of a body with right ascension `ra_rad`, in (-π, π].
///
/// Negative before upper transit (body rising side), positive after.
pub fn hour_angle_rad(jd_ut: f64, longitude_deg: f64, ra_rad: f64) -> f64 {
    let ha = (local_sidereal_time_rad(jd_ut, longitude_deg) - ra_rad).rem_euclid(TAU);
    if ha > PI { ha - TAU } else { ha }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_at_j2000_midnight() {
        // 2000-Jan-01 0h UT: GMST = 6h 39m 51.17s ≈ 99.967 deg
        let deg = gmst_rad(2_451_544.5).to_degrees();
        assert!((deg - 99.967).abs() < 0.01, "GMST = {deg}");
    }

    #[test]
    fn one_solar_day_gains_about_one_degree() {
        let g1 = gmst_rad(2_460_000.5).to_degrees();
        let g2 = gmst_rad(2_460_001.5).to_degrees();
        let gain = (g2 - g1).rem_euclid(360.0);
        assert!((gain - 0.9856).abs() < 0.001, "daily gain = {gain}");
    }

    #[test]
    fn east_longitude_advances_lst() {
        let jd = 2_460_000.25;
        let greenwich = local_sidereal_time_rad(jd, 0.0);
        let chennai = local_sidereal_time_rad(jd, 80.27);
        let diff = (chennai - greenwich).rem_euclid(TAU).to_degrees();
        assert!((diff - 80.27).abs() < 1e-9);
    }

    #[test]
    fn hour_angle_is_signed() {
        let jd = 2_460_000.25;
        let lst = local_sidereal_time_rad(jd, 0.0);
        let east_of_meridian = hour_angle_rad(jd, 0.0, lst + 0.1);
        let west_of_meridian = hour_angle_rad(jd, 0.0, lst - 0.1);
        assert!((east_of_meridian + 0.1).abs() < 1e-12);
        assert!((west_of_meridian - 0.1).abs() < 1e-12);
    }

    #[test]
    fn results_stay_in_range() {
        for jd in [2_440_000.5, 2_451_545.0, 2_460_000.5, 2_470_123.75] {
            let g = gmst_rad(jd);
            assert!((0.0..TAU).contains(&g), "GMST out of range: {g}");
            let ha = hour_angle_rad(jd, -122.4, 1.0);
            assert!(ha > -PI && ha <= PI, "hour angle out of range: {ha}");
        }
    }
}
