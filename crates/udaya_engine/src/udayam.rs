//! Udaya Lagna (Udayam) interpolation.
//!
//! Udayam turns one full circle during the day arc (sunrise to sunset) and
//! another during the night arc (sunset to next sunrise). Each arc starts at
//! its anchor longitude, normally the Sun's, and advances linearly in
//! elapsed time, so the point moves faster through a short arc than a long
//! one.

use chrono::NaiveDateTime;
use log::debug;
use serde::Serialize;
use udaya_time::seconds_between;
use udaya_vedic_base::normalize_360;

use crate::error::EngineError;
use crate::special_points_types::{SpecialPoint, SpecialPointKind};
use crate::vedic_day_types::SunTimesTriad;

/// Half of a vedic day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arc {
    /// Sunrise to sunset.
    Day,
    /// Sunset to next sunrise.
    Night,
}

impl std::fmt::Display for Arc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Day => "day",
            Self::Night => "night",
        })
    }
}

/// Rotating ecliptic point bound to one sunrise/sunset/next-sunrise triad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UdayaLagnaInterpolator {
    triad: SunTimesTriad,
    sunrise_anchor: f64,
    sunset_anchor: f64,
}

impl UdayaLagnaInterpolator {
    /// Fails on zero-length or out-of-order arcs.
    pub fn new(
        sunrise: NaiveDateTime,
        sunset: NaiveDateTime,
        next_sunrise: NaiveDateTime,
        sunrise_anchor: f64,
        sunset_anchor: f64,
    ) -> Result<Self, EngineError> {
        let triad = SunTimesTriad::new(sunrise, sunset, next_sunrise)?;
        Ok(Self::with_anchors(triad, sunrise_anchor, sunset_anchor))
    }

    /// Both arcs anchored to the Sun's longitude.
    pub fn from_triad(triad: SunTimesTriad, sun_longitude: f64) -> Self {
        Self::with_anchors(triad, sun_longitude, sun_longitude)
    }

    fn with_anchors(triad: SunTimesTriad, sunrise_anchor: f64, sunset_anchor: f64) -> Self {
        Self {
            triad,
            sunrise_anchor,
            sunset_anchor,
        }
    }

    pub fn triad(&self) -> &SunTimesTriad {
        &self.triad
    }

    /// Which arc `t` falls in; outside [sunrise, next sunrise) is an error.
    pub fn arc_at(&self, t: NaiveDateTime) -> Result<Arc, EngineError> {
        if !self.triad.contains(t) {
            return Err(EngineError::MomentOutOfRange {
                moment: t,
                start: self.triad.sunrise(),
                end: self.triad.next_sunrise(),
            });
        }
        Ok(if t < self.triad.sunset() {
            Arc::Day
        } else {
            Arc::Night
        })
    }

    /// Fraction of the current arc elapsed at `t`, in [0, 1).
    pub fn arc_fraction(&self, t: NaiveDateTime) -> Result<(Arc, f64), EngineError> {
        let arc = self.arc_at(t)?;
        let (start, end) = match arc {
            Arc::Day => (self.triad.sunrise(), self.triad.sunset()),
            Arc::Night => (self.triad.sunset(), self.triad.next_sunrise()),
        };
        let fraction = seconds_between(start, t) / seconds_between(start, end);
        Ok((arc, fraction))
    }

    /// Udayam longitude in degrees at `t`, [0, 360).
    pub fn longitude_at(&self, t: NaiveDateTime) -> Result<f64, EngineError> {
        let (arc, fraction) = self.arc_fraction(t)?;
        let anchor = match arc {
            Arc::Day => self.sunrise_anchor,
            Arc::Night => self.sunset_anchor,
        };
        let longitude = normalize_360(anchor + 360.0 * fraction);
        debug!("udayam at {t}: {arc} arc, fraction {fraction:.6}, longitude {longitude:.6}");
        Ok(longitude)
    }

    /// Udayam at `t` as a classified special point.
    pub fn at_moment(&self, t: NaiveDateTime) -> Result<SpecialPoint, EngineError> {
        Ok(SpecialPoint::new(SpecialPointKind::Udayam, self.longitude_at(t)?))
    }
}
