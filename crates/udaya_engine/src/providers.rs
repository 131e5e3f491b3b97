//! Collaborators the engine is built against.
//!
//! Sunrise/sunset and planetary longitudes come from outside the engine. The
//! traits here are the injected capabilities; [`AnalyticSunTimes`] and
//! [`AnalyticEphemeris`] are self-contained implementations good enough to
//! run the engine without an external ephemeris.

use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, warn};
use udaya_time::{date_to_jd_0h, jd_ut_to_local};
use udaya_vedic_base::{
    AyanamshaSystem, GeoLocation, Graha, RiseSetConfig, RiseSetEvent, RiseSetResult,
    ayanamsha_deg, compute_rise_set, local_clock_noon_jd, normalize_360, sun_position,
};

use crate::error::EngineError;
use crate::moment::QueryMoment;

/// Civil sunrise and sunset for a local calendar date.
///
/// Implementations must report polar day/night as
/// [`EngineError::SunNeverRises`]/[`EngineError::SunNeverSets`] rather than
/// substitute a value.
pub trait SunriseProvider {
    fn sunrise(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        tz_offset_hours: f64,
    ) -> Result<NaiveDateTime, EngineError>;

    fn sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        tz_offset_hours: f64,
    ) -> Result<NaiveDateTime, EngineError>;
}

impl<P: SunriseProvider + ?Sized> SunriseProvider for &P {
    fn sunrise(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        tz_offset_hours: f64,
    ) -> Result<NaiveDateTime, EngineError> {
        (**self).sunrise(date, location, tz_offset_hours)
    }

    fn sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        tz_offset_hours: f64,
    ) -> Result<NaiveDateTime, EngineError> {
        (**self).sunset(date, location, tz_offset_hours)
    }
}

/// Sidereal ecliptic longitudes of the grahas.
pub trait EphemerisProvider {
    /// Sidereal longitude in degrees, [0, 360).
    fn planet_longitude(
        &self,
        graha: Graha,
        moment: &QueryMoment,
        ayanamsha: AyanamshaSystem,
    ) -> Result<f64, EngineError>;

    fn sun_longitude(
        &self,
        moment: &QueryMoment,
        ayanamsha: AyanamshaSystem,
    ) -> Result<f64, EngineError> {
        self.planet_longitude(Graha::Surya, moment, ayanamsha)
    }
}

impl<E: EphemerisProvider + ?Sized> EphemerisProvider for &E {
    fn planet_longitude(
        &self,
        graha: Graha,
        moment: &QueryMoment,
        ayanamsha: AyanamshaSystem,
    ) -> Result<f64, EngineError> {
        (**self).planet_longitude(graha, moment, ayanamsha)
    }
}

/// Sunrise/sunset from the analytic solar theory and hour-angle search.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnalyticSunTimes {
    pub config: RiseSetConfig,
}

impl AnalyticSunTimes {
    pub fn new(config: RiseSetConfig) -> Self {
        Self { config }
    }

    fn event(
        &self,
        event: RiseSetEvent,
        date: NaiveDate,
        location: &GeoLocation,
        tz_offset_hours: f64,
    ) -> Result<NaiveDateTime, EngineError> {
        // Clock noon, not UT noon: far-offset zones (UTC+13, UTC+14) would
        // otherwise land on the neighbouring local date.
        let noon = local_clock_noon_jd(date_to_jd_0h(date), tz_offset_hours);
        match compute_rise_set(location, event, noon, &self.config)? {
            RiseSetResult::Event { jd_ut, .. } => {
                let local = jd_ut_to_local(jd_ut, tz_offset_hours)?;
                debug!("{event:?} on {date}: {local}");
                Ok(local)
            }
            RiseSetResult::NeverRises => {
                warn!(
                    "polar night on {date} at latitude {:.4}",
                    location.latitude_deg
                );
                Err(EngineError::SunNeverRises { date })
            }
            RiseSetResult::NeverSets => {
                warn!(
                    "midnight sun on {date} at latitude {:.4}",
                    location.latitude_deg
                );
                Err(EngineError::SunNeverSets { date })
            }
        }
    }
}

impl SunriseProvider for AnalyticSunTimes {
    fn sunrise(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        tz_offset_hours: f64,
    ) -> Result<NaiveDateTime, EngineError> {
        self.event(RiseSetEvent::Sunrise, date, location, tz_offset_hours)
    }

    fn sunset(
        &self,
        date: NaiveDate,
        location: &GeoLocation,
        tz_offset_hours: f64,
    ) -> Result<NaiveDateTime, EngineError> {
        self.event(RiseSetEvent::Sunset, date, location, tz_offset_hours)
    }
}

/// Sidereal Sun from the analytic solar theory. Other grahas are not
/// supported and report [`EngineError::UnsupportedBody`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticEphemeris;

impl EphemerisProvider for AnalyticEphemeris {
    fn planet_longitude(
        &self,
        graha: Graha,
        moment: &QueryMoment,
        ayanamsha: AyanamshaSystem,
    ) -> Result<f64, EngineError> {
        if graha != Graha::Surya {
            return Err(EngineError::UnsupportedBody(graha));
        }
        let jd = moment.jd_ut();
        let tropical = sun_position(jd).longitude_deg;
        let sidereal = normalize_360(tropical - ayanamsha_deg(ayanamsha, jd));
        debug!("sun at jd {jd:.6}: tropical {tropical:.6}, sidereal {sidereal:.6}");
        Ok(sidereal)
    }
}
