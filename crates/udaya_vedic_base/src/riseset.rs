//! Sunrise/sunset computation with twilight variants.
//!
//! Iterative hour-angle algorithm: start from the transit nearest the
//! supplied local clock noon, step out by the semi-diurnal arc, then refine
//! against the Sun's position at the event time until the correction drops
//! below [`CONVERGENCE_DAYS`].
//!
//! Seeding from clock noon rather than the UT date keeps the events on the
//! requested local date even where the zone offset is far from
//! `longitude / 15` (Samoa, the Line Islands). At high latitudes the sunset
//! of a date may still fall after local midnight.

use std::f64::consts::{PI, TAU};

use udaya_time::{SIDEREAL_RATE, hour_angle_rad};

use crate::error::VedicError;
use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};
use crate::solar::sun_position;

/// Maximum iterations for the refinement loop.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.086 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Sidereal angular rate in radians per solar day.
const SIDEREAL_RAD_PER_DAY: f64 = TAU * SIDEREAL_RATE;

/// JD UT of 12:00 local clock time on a civil date.
///
/// `jd_0h` is 0h UT of the same calendar date.
/// `JD_noon = JD_0h + 0.5 - tz_offset_hours / 24`
pub fn local_clock_noon_jd(jd_0h: f64, tz_offset_hours: f64) -> f64 {
    jd_0h + 0.5 - tz_offset_hours / 24.0
}

/// Semi-diurnal arc in radians for a declination, or the polar outcome.
fn semi_diurnal_arc(phi: f64, dec: f64, h0_deg: f64) -> Result<f64, RiseSetResult> {
    let h0 = h0_deg.to_radians();
    let cos_h = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if cos_h > 1.0 {
        Err(RiseSetResult::NeverRises)
    } else if cos_h < -1.0 {
        Err(RiseSetResult::NeverSets)
    } else {
        Ok(cos_h.acos())
    }
}

fn wrap_pi(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a > PI { a - TAU } else { a }
}

/// Compute a single rise/set event for the Sun.
///
/// `jd_ut_noon` is local clock noon of the wanted date (see
/// [`local_clock_noon_jd`]). Returns the event in JD UT, or
/// `NeverRises`/`NeverSets` when the Sun does not cross the target altitude.
pub fn compute_rise_set(
    location: &GeoLocation,
    event: RiseSetEvent,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, VedicError> {
    location.validate()?;
    let phi = location.latitude_rad();
    let h0_deg = config.target_altitude_deg(event, location.altitude_m);

    let noon_sun = sun_position(jd_ut_noon);
    let h = match semi_diurnal_arc(phi, noon_sun.declination_rad, h0_deg) {
        Ok(h) => h,
        Err(polar) => return Ok(polar),
    };

    // Transit: hour angle 0
    let ha_noon = hour_angle_rad(
        jd_ut_noon,
        location.longitude_deg,
        noon_sun.right_ascension_rad,
    );
    let jd_transit = jd_ut_noon - ha_noon / SIDEREAL_RAD_PER_DAY;

    let h_days = h / SIDEREAL_RAD_PER_DAY;
    let mut jd_event = if event.is_rising() {
        jd_transit - h_days
    } else {
        jd_transit + h_days
    };

    for _ in 0..MAX_ITERATIONS {
        let sun = sun_position(jd_event);
        let h_target = match semi_diurnal_arc(phi, sun.declination_rad, h0_deg) {
            Ok(h) => h,
            Err(polar) => return Ok(polar),
        };
        let ha_target = if event.is_rising() { -h_target } else { h_target };
        let ha_actual = hour_angle_rad(jd_event, location.longitude_deg, sun.right_ascension_rad);

        let correction = wrap_pi(ha_target - ha_actual) / SIDEREAL_RAD_PER_DAY;
        jd_event += correction;
        if correction.abs() < CONVERGENCE_DAYS {
            break;
        }
    }

    Ok(RiseSetResult::Event {
        jd_ut: jd_event,
        event,
    })
}

/// Compute all 8 rise/set events for a day, in chronological order:
/// astronomical, nautical and civil dawn, sunrise, sunset, then the dusks.
pub fn compute_all_events(
    location: &GeoLocation,
    jd_ut_noon: f64,
    config: &RiseSetConfig,
) -> Result<Vec<RiseSetResult>, VedicError> {
    const EVENTS: [RiseSetEvent; 8] = [
        RiseSetEvent::AstronomicalDawn,
        RiseSetEvent::NauticalDawn,
        RiseSetEvent::CivilDawn,
        RiseSetEvent::Sunrise,
        RiseSetEvent::Sunset,
        RiseSetEvent::CivilDusk,
        RiseSetEvent::NauticalDusk,
        RiseSetEvent::AstronomicalDusk,
    ];
    EVENTS
        .iter()
        .map(|&evt| compute_rise_set(location, evt, jd_ut_noon, config))
        .collect()
}
