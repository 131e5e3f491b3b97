//! Error type for the day and special-point engine.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;
use udaya_time::TimeError;
use udaya_vedic_base::{Graha, VedicError};

use crate::udayam::Arc;

/// Errors from engine operations. Every variant is surfaced to the caller;
/// no operation returns a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Polar night: no sunrise on this date at this latitude.
    #[error("sun never rises on {date}")]
    SunNeverRises { date: NaiveDate },
    /// Midnight sun: no sunset on this date at this latitude.
    #[error("sun never sets on {date}")]
    SunNeverSets { date: NaiveDate },
    /// Sunrise, sunset and next sunrise are not strictly increasing.
    #[error("sun times out of order: sunrise {sunrise}, sunset {sunset}, next sunrise {next_sunrise}")]
    NonMonotonicTriad {
        sunrise: NaiveDateTime,
        sunset: NaiveDateTime,
        next_sunrise: NaiveDateTime,
    },
    /// Zero-length day or night arc.
    #[error("degenerate {arc} arc of zero length")]
    DegenerateArc { arc: Arc },
    /// Moment lies outside [sunrise, next sunrise) of the triad it was paired with.
    #[error("moment {moment} outside vedic day [{start}, {end})")]
    MomentOutOfRange {
        moment: NaiveDateTime,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    /// Sun sign outside 1..=12.
    #[error("invalid sun sign {0}, expected 1..=12")]
    InvalidSign(u8),
    /// The ephemeris provider cannot compute this body.
    #[error("ephemeris provider does not support {0}")]
    UnsupportedBody(Graha),
    /// Date arithmetic left the supported calendar range.
    #[error("date {0} at the edge of the supported calendar")]
    CalendarOverflow(NaiveDate),
    #[error(transparent)]
    Vedic(#[from] VedicError),
    #[error(transparent)]
    Time(#[from] TimeError),
}
