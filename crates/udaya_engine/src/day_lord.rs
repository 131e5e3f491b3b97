//! Weekday lord of a moment under two day-start conventions.
//!
//! [`DayBoundary::Sunrise`] keys the weekday on the vedic date.
//! [`DayBoundary::FixedClock`] starts the day at 06:00 wall-clock time and
//! is what the planetary-hour tables are keyed on. The two disagree for
//! moments between 06:00 and a later sunrise (or between an earlier sunrise
//! and 06:00); they are kept separate on purpose.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use log::debug;
use serde::Serialize;
use udaya_vedic_base::{Graha, Vaar};

use crate::error::EngineError;
use crate::vedic_day::previous_date;
use crate::vedic_day_types::VedicDay;

/// Hour at which the fixed-clock day starts.
pub const FIXED_CLOCK_DAY_START_HOUR: u32 = 6;

/// Where a day begins for day-lord purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DayBoundary {
    /// Astronomical sunrise.
    Sunrise,
    /// 06:00 local clock time.
    FixedClock,
}

impl DayBoundary {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::FixedClock => "fixed-clock",
        }
    }
}

impl FromStr for DayBoundary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunrise" => Ok(Self::Sunrise),
            "fixed-clock" | "fixed_clock" | "clock" => Ok(Self::FixedClock),
            other => Err(format!("unknown day boundary `{other}`")),
        }
    }
}

/// Day lord result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayLord {
    pub convention: DayBoundary,
    /// Date whose weekday was used.
    pub date: NaiveDate,
    pub vaar: Vaar,
    pub lord: Graha,
}

impl DayLord {
    fn of(convention: DayBoundary, date: NaiveDate) -> Self {
        let vaar = Vaar::of_date(date);
        Self {
            convention,
            date,
            vaar,
            lord: vaar.lord(),
        }
    }
}

impl std::fmt::Display for DayLord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {}) [{}]",
            self.lord.name(),
            self.vaar.name(),
            self.date,
            self.convention.name()
        )
    }
}

/// Day lord keyed on the vedic date of a resolved day.
pub fn day_lord_sunrise(day: &VedicDay) -> DayLord {
    DayLord::of(DayBoundary::Sunrise, day.date)
}

/// Day lord keyed on a 06:00 clock boundary: before 06:00 the previous
/// civil date is used.
pub fn day_lord_fixed_clock(local: NaiveDateTime) -> Result<DayLord, EngineError> {
    let civil = local.date();
    let date = if local.hour() < FIXED_CLOCK_DAY_START_HOUR {
        previous_date(civil)?
    } else {
        civil
    };
    debug!("fixed-clock day for {local}: {date}");
    Ok(DayLord::of(DayBoundary::FixedClock, date))
}

/// Day lord under the chosen convention.
pub fn day_lord(
    convention: DayBoundary,
    local: NaiveDateTime,
    day: &VedicDay,
) -> Result<DayLord, EngineError> {
    match convention {
        DayBoundary::Sunrise => Ok(day_lord_sunrise(day)),
        DayBoundary::FixedClock => day_lord_fixed_clock(local),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vedic_day_types::SunTimesTriad;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn day(vedic: u32, civil: u32) -> VedicDay {
        VedicDay {
            date: NaiveDate::from_ymd_opt(2024, 3, vedic).unwrap(),
            civil_date: NaiveDate::from_ymd_opt(2024, 3, civil).unwrap(),
            triad: SunTimesTriad::new(at(vedic, 6, 0), at(vedic, 18, 0), at(vedic + 1, 6, 0))
                .unwrap(),
        }
    }

    #[test]
    fn sunrise_convention_uses_vedic_date() {
        // 2024-03-19 was a Tuesday
        let lord = day_lord_sunrise(&day(19, 20));
        assert_eq!(lord.vaar, Vaar::Mangalvaar);
        assert_eq!(lord.lord, Graha::Mangal);
        assert_eq!(lord.convention, DayBoundary::Sunrise);
    }

    #[test]
    fn fixed_clock_before_six_is_previous_day() {
        let lord = day_lord_fixed_clock(at(20, 5, 59)).unwrap();
        assert_eq!(lord.date, NaiveDate::from_ymd_opt(2024, 3, 19).unwrap());
        assert_eq!(lord.lord, Graha::Mangal);
    }

    #[test]
    fn fixed_clock_at_six_is_current_day() {
        let lord = day_lord_fixed_clock(at(20, 6, 0)).unwrap();
        assert_eq!(lord.date, NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
        assert_eq!(lord.lord, Graha::Buddh);
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let d = day(19, 20);
        let t = at(20, 6, 30);
        assert_eq!(day_lord(DayBoundary::Sunrise, t, &d).unwrap(), day_lord_sunrise(&d));
        assert_eq!(
            day_lord(DayBoundary::FixedClock, t, &d).unwrap(),
            day_lord_fixed_clock(t).unwrap()
        );
    }

    #[test]
    fn boundary_names_parse() {
        assert_eq!("sunrise".parse::<DayBoundary>(), Ok(DayBoundary::Sunrise));
        assert_eq!("Fixed-Clock".parse::<DayBoundary>(), Ok(DayBoundary::FixedClock));
        assert!("noon".parse::<DayBoundary>().is_err());
    }

    #[test]
    fn display() {
        let lord = day_lord_fixed_clock(at(20, 7, 0)).unwrap();
        assert_eq!(lord.to_string(), "Buddh (Budhvaar, 2024-03-20) [fixed-clock]");
    }

    #[test]
    fn earliest_date_overflows() {
        let t = NaiveDate::MIN.and_hms_opt(1, 0, 0).unwrap();
        assert_eq!(
            day_lord_fixed_clock(t),
            Err(EngineError::CalendarOverflow(NaiveDate::MIN))
        );
    }
}
