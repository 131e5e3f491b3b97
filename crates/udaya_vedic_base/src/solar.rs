//! Low-precision analytic position of the Sun.
//!
//! Mean longitude plus equation of centre (Meeus, Astronomical Algorithms,
//! ch. 25), with the nutation/aberration correction for apparent longitude.
//! Good to about 0.01 deg over several centuries around J2000, which is far
//! below the tolerance of sunrise timing and sign classification.

use serde::Serialize;
use udaya_time::jd_to_centuries;

use crate::util::normalize_360;

/// Solar semidiameter at 1 AU in arcseconds.
const SEMIDIAMETER_1AU_ARCSEC: f64 = 959.63;

/// Geocentric apparent position of the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunPosition {
    /// Apparent tropical ecliptic longitude, degrees [0, 360).
    pub longitude_deg: f64,
    /// Right ascension, radians [0, 2π).
    pub right_ascension_rad: f64,
    /// Declination, radians.
    pub declination_rad: f64,
    /// Earth-Sun distance in AU.
    pub distance_au: f64,
}

impl SunPosition {
    /// Apparent angular semidiameter in arcminutes (~15.7' to ~16.3').
    pub fn semidiameter_arcmin(&self) -> f64 {
        SEMIDIAMETER_1AU_ARCSEC / self.distance_au / 60.0
    }
}

/// Mean obliquity of the ecliptic in degrees (IAU 1980 polynomial).
pub fn mean_obliquity_deg(t_centuries: f64) -> f64 {
    let t = t_centuries;
    let arcsec = 21.448 - t * (46.8150 + t * (0.00059 - t * 0.001813));
    23.0 + (26.0 + arcsec / 60.0) / 60.0
}

/// Sun position at a Julian Date (UT is close enough to TT at this precision).
pub fn sun_position(jd: f64) -> SunPosition {
    let t = jd_to_centuries(jd);

    let l0 = normalize_360(280.46646 + t * (36_000.76983 + t * 0.000_303_2));
    let m = normalize_360(357.52911 + t * (35_999.05029 - t * 0.000_153_7)).to_radians();
    let e = 0.016_708_634 - t * (0.000_042_037 + t * 0.000_000_126_7);

    let c = (1.914_602 - t * (0.004_817 + t * 0.000_014)) * m.sin()
        + (0.019_993 - t * 0.000_101) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    let anomaly = m + c.to_radians();
    let distance_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * anomaly.cos());

    // Nutation and aberration
    let omega = (125.04 - 1934.136 * t).to_radians();
    let apparent = normalize_360(true_lon - 0.005_69 - 0.004_78 * omega.sin());

    let eps = (mean_obliquity_deg(t) + 0.002_56 * omega.cos()).to_radians();
    let lambda = apparent.to_radians();
    let ra = (eps.cos() * lambda.sin())
        .atan2(lambda.cos())
        .rem_euclid(std::f64::consts::TAU);
    let dec = (eps.sin() * lambda.sin()).asin();

    SunPosition {
        longitude_deg: apparent,
        right_ascension_rad: ra,
        declination_rad: dec,
        distance_au,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992-Oct-13 0h TD: apparent λ = 199.90895, δ = -7.78507, R = 0.99766
        let sun = sun_position(2_448_908.5);
        assert!((sun.longitude_deg - 199.909).abs() < 0.01, "λ = {}", sun.longitude_deg);
        assert!(
            (sun.declination_rad.to_degrees() + 7.785).abs() < 0.01,
            "δ = {}",
            sun.declination_rad.to_degrees()
        );
        assert!((sun.distance_au - 0.99766).abs() < 1e-4, "R = {}", sun.distance_au);
    }

    #[test]
    fn right_ascension_of_example() {
        // α = 198.38083 deg
        let sun = sun_position(2_448_908.5);
        let ra = sun.right_ascension_rad.to_degrees();
        assert!((ra - 198.381).abs() < 0.01, "α = {ra}");
    }

    #[test]
    fn equinox_2024_longitude_near_zero() {
        // March equinox 2024-03-20 03:06 UT
        let sun = sun_position(2_460_389.629);
        let off = if sun.longitude_deg > 180.0 {
            sun.longitude_deg - 360.0
        } else {
            sun.longitude_deg
        };
        assert!(off.abs() < 0.02, "λ = {}", sun.longitude_deg);
        assert!(sun.declination_rad.to_degrees().abs() < 0.02);
    }

    #[test]
    fn obliquity_at_j2000() {
        let eps = mean_obliquity_deg(0.0);
        assert!((eps - 23.439_291).abs() < 1e-6, "ε = {eps}");
    }

    #[test]
    fn semidiameter_range() {
        // Early January perihelion, early July aphelion
        let peri = sun_position(2_460_314.5).semidiameter_arcmin();
        let aph = sun_position(2_460_496.5).semidiameter_arcmin();
        assert!(peri > 16.2 && peri < 16.4, "perihelion SD = {peri}");
        assert!(aph > 15.6 && aph < 15.8, "aphelion SD = {aph}");
    }
}
