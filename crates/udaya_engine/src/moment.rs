//! The civil moment every engine query starts from.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use udaya_time::{local_to_jd_ut, validate_tz_offset};
use udaya_vedic_base::GeoLocation;

use crate::error::EngineError;

/// Local wall-clock timestamp at a place, with its fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QueryMoment {
    pub local: NaiveDateTime,
    pub location: GeoLocation,
    /// Hours east of Greenwich, within ±14.
    pub tz_offset_hours: f64,
}

impl QueryMoment {
    /// Validated constructor: latitude in [-90, 90], longitude in
    /// [-180, 180], offset within ±14 h.
    pub fn new(
        local: NaiveDateTime,
        location: GeoLocation,
        tz_offset_hours: f64,
    ) -> Result<Self, EngineError> {
        location.validate()?;
        validate_tz_offset(tz_offset_hours)?;
        Ok(Self {
            local,
            location,
            tz_offset_hours,
        })
    }

    /// Same place and offset at another wall-clock time.
    pub fn at(&self, local: NaiveDateTime) -> Self {
        Self { local, ..*self }
    }

    pub fn civil_date(&self) -> NaiveDate {
        self.local.date()
    }

    pub fn jd_ut(&self) -> f64 {
        local_to_jd_ut(self.local, self.tz_offset_hours)
    }
}
