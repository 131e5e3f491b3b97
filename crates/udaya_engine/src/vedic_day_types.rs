//! Types for vedic day resolution.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::error::EngineError;
use crate::udayam::Arc;

/// Sunrise, sunset and the following sunrise bounding one vedic day.
///
/// Always strictly increasing; construction fails otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SunTimesTriad {
    sunrise: NaiveDateTime,
    sunset: NaiveDateTime,
    next_sunrise: NaiveDateTime,
}

impl SunTimesTriad {
    /// Equal neighbours are a [`EngineError::DegenerateArc`]; any other
    /// ordering violation is [`EngineError::NonMonotonicTriad`].
    pub fn new(
        sunrise: NaiveDateTime,
        sunset: NaiveDateTime,
        next_sunrise: NaiveDateTime,
    ) -> Result<Self, EngineError> {
        if sunset == sunrise {
            return Err(EngineError::DegenerateArc { arc: Arc::Day });
        }
        if next_sunrise == sunset {
            return Err(EngineError::DegenerateArc { arc: Arc::Night });
        }
        if !(sunrise < sunset && sunset < next_sunrise) {
            return Err(EngineError::NonMonotonicTriad {
                sunrise,
                sunset,
                next_sunrise,
            });
        }
        Ok(Self {
            sunrise,
            sunset,
            next_sunrise,
        })
    }

    pub fn sunrise(&self) -> NaiveDateTime {
        self.sunrise
    }

    pub fn sunset(&self) -> NaiveDateTime {
        self.sunset
    }

    pub fn next_sunrise(&self) -> NaiveDateTime {
        self.next_sunrise
    }

    /// Sunrise to sunset.
    pub fn day_length(&self) -> TimeDelta {
        self.sunset - self.sunrise
    }

    /// Sunset to next sunrise.
    pub fn night_length(&self) -> TimeDelta {
        self.next_sunrise - self.sunset
    }

    /// Whether `t` lies in [sunrise, next sunrise).
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.sunrise <= t && t < self.next_sunrise
    }
}

/// A resolved vedic (sunrise-to-sunrise) day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VedicDay {
    /// Vedic calendar date: the civil date, or the day before when the
    /// moment precedes that date's sunrise.
    pub date: NaiveDate,
    /// Civil date of the query moment.
    pub civil_date: NaiveDate,
    pub triad: SunTimesTriad,
}

impl VedicDay {
    /// Whether the vedic date differs from the civil date.
    pub fn before_civil_sunrise(&self) -> bool {
        self.date != self.civil_date
    }

    pub fn day_length(&self) -> TimeDelta {
        self.triad.day_length()
    }

    pub fn night_length(&self) -> TimeDelta {
        self.triad.night_length()
    }

    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.triad.contains(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn valid_triad_lengths() {
        let triad = SunTimesTriad::new(t(1, 6, 0), t(1, 18, 0), t(2, 6, 2)).unwrap();
        assert_eq!(triad.day_length(), TimeDelta::hours(12));
        assert_eq!(triad.night_length(), TimeDelta::minutes(12 * 60 + 2));
    }

    #[test]
    fn contains_is_half_open() {
        let triad = SunTimesTriad::new(t(1, 6, 0), t(1, 18, 0), t(2, 6, 0)).unwrap();
        assert!(triad.contains(t(1, 6, 0)));
        assert!(triad.contains(t(2, 5, 59)));
        assert!(!triad.contains(t(2, 6, 0)));
        assert!(!triad.contains(t(1, 5, 59)));
    }

    #[test]
    fn zero_length_day_is_degenerate() {
        let r = SunTimesTriad::new(t(1, 6, 0), t(1, 6, 0), t(2, 6, 0));
        assert_eq!(r, Err(EngineError::DegenerateArc { arc: Arc::Day }));
    }

    #[test]
    fn zero_length_night_is_degenerate() {
        let r = SunTimesTriad::new(t(1, 6, 0), t(1, 18, 0), t(1, 18, 0));
        assert_eq!(r, Err(EngineError::DegenerateArc { arc: Arc::Night }));
    }

    #[test]
    fn reversed_times_rejected() {
        let r = SunTimesTriad::new(t(1, 18, 0), t(1, 6, 0), t(2, 6, 0));
        assert!(matches!(r, Err(EngineError::NonMonotonicTriad { .. })), "got {r:?}");
        let r = SunTimesTriad::new(t(1, 6, 0), t(2, 18, 0), t(2, 6, 0));
        assert!(matches!(r, Err(EngineError::NonMonotonicTriad { .. })), "got {r:?}");
    }
}
