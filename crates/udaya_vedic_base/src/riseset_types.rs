//! Types for sunrise/sunset and twilight calculations.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Mean Earth radius in meters (for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    #[serde(default)]
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Check latitude and longitude ranges; non-finite values are rejected.
    pub fn validate(&self) -> Result<(), VedicError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(VedicError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(VedicError::InvalidLocation("longitude must be within [-180, 180]"));
        }
        if !self.altitude_m.is_finite() {
            return Err(VedicError::InvalidLocation("altitude must be finite"));
        }
        Ok(())
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

impl Default for GeoLocation {
    /// Greenwich at sea level.
    fn default() -> Self {
        Self::new(51.4769, 0.0, 0.0)
    }
}

/// Rise/set event types, including twilight variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiseSetEvent {
    /// Upper limb of the Sun on the horizon, refraction included.
    Sunrise,
    Sunset,
    /// Sun centre 6 deg below the horizon.
    CivilDawn,
    CivilDusk,
    /// Sun centre 12 deg below the horizon.
    NauticalDawn,
    NauticalDusk,
    /// Sun centre 18 deg below the horizon.
    AstronomicalDawn,
    AstronomicalDusk,
}

impl RiseSetEvent {
    /// Fixed depression of the Sun centre for twilight events; `None` for
    /// sunrise and sunset, whose depression depends on [`RiseSetConfig`].
    pub fn twilight_depression_deg(self) -> Option<f64> {
        match self {
            Self::Sunrise | Self::Sunset => None,
            Self::CivilDawn | Self::CivilDusk => Some(6.0),
            Self::NauticalDawn | Self::NauticalDusk => Some(12.0),
            Self::AstronomicalDawn | Self::AstronomicalDusk => Some(18.0),
        }
    }

    /// Whether this is a morning event.
    pub fn is_rising(self) -> bool {
        matches!(
            self,
            Self::Sunrise | Self::CivilDawn | Self::NauticalDawn | Self::AstronomicalDawn
        )
    }
}

/// Horizon parameters for sunrise/sunset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes.
    pub refraction_arcmin: f64,
    /// Solar angular semidiameter in arcminutes.
    pub semidiameter_arcmin: f64,
    /// Apply geometric dip sqrt(2h/R) for observer altitude.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Total sunrise/sunset depression below the geometric horizon, degrees.
    ///
    /// `h0 = (refraction + semidiameter) / 60 + dip`
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        let base = (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0;
        if self.altitude_correction && altitude_m > 0.0 {
            let dip_rad = (2.0 * altitude_m / EARTH_RADIUS_M).sqrt();
            base + dip_rad * (180.0 / PI)
        } else {
            base
        }
    }

    /// Geometric altitude of the Sun centre at which `event` happens (negative).
    pub fn target_altitude_deg(&self, event: RiseSetEvent, altitude_m: f64) -> f64 {
        match event.twilight_depression_deg() {
            Some(depression) => -depression,
            None => -self.horizon_depression_deg(altitude_m),
        }
    }
}

/// Outcome of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum RiseSetResult {
    /// Event occurs at the given Julian Date (UT).
    Event { jd_ut: f64, event: RiseSetEvent },
    /// Sun stays below the target altitude all day (polar night).
    NeverRises,
    /// Sun stays above the target altitude all day (midnight sun).
    NeverSets,
}
