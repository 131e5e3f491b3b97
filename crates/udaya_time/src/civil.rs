//! Local wall-clock timestamps and their Julian Date equivalents.
//!
//! The engine works in civil local time (`NaiveDateTime`, no timezone
//! database) plus a fixed offset in hours east of Greenwich. Conversion to
//! JD UT is needed only when talking to astronomical routines.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd};

/// Largest timezone offset in use worldwide (Line Islands, UTC+14).
pub const MAX_TZ_OFFSET_HOURS: f64 = 14.0;

const ACCEPTED_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Reject timezone offsets that are not finite or exceed ±14 h.
pub fn validate_tz_offset(tz_offset_hours: f64) -> Result<f64, TimeError> {
    if tz_offset_hours.is_finite() && tz_offset_hours.abs() <= MAX_TZ_OFFSET_HOURS {
        Ok(tz_offset_hours)
    } else {
        Err(TimeError::InvalidOffset(tz_offset_hours))
    }
}

/// Julian Date at 0h UT of a calendar date.
pub fn date_to_jd_0h(date: NaiveDate) -> f64 {
    calendar_to_jd(date.year(), date.month(), date.day() as f64)
}

/// Convert a local wall-clock timestamp to JD UT.
pub fn local_to_jd_ut(local: NaiveDateTime, tz_offset_hours: f64) -> f64 {
    let time = local.time();
    let seconds =
        time.num_seconds_from_midnight() as f64 + time.nanosecond() as f64 / 1_000_000_000.0;
    date_to_jd_0h(local.date()) + seconds / SECONDS_PER_DAY - tz_offset_hours / 24.0
}

/// Convert JD UT to a local wall-clock timestamp, rounded to the millisecond.
pub fn jd_ut_to_local(jd_ut: f64, tz_offset_hours: f64) -> Result<NaiveDateTime, TimeError> {
    let millis = ((jd_ut - UNIX_EPOCH_JD) * SECONDS_PER_DAY + tz_offset_hours * 3600.0) * 1000.0;
    if !millis.is_finite() {
        return Err(TimeError::OutOfRange(jd_ut));
    }
    DateTime::from_timestamp_millis(millis.round() as i64)
        .map(|dt| dt.naive_utc())
        .ok_or(TimeError::OutOfRange(jd_ut))
}

/// Signed number of seconds from `from` to `to`.
pub fn seconds_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    let delta = to.signed_duration_since(from);
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64 / 1000.0,
    }
}

/// Parse `YYYY-MM-DDTHH:MM[:SS[.fff]]` (a space may replace the `T`).
pub fn parse_local(s: &str) -> Result<NaiveDateTime, TimeError> {
    let trimmed = s.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| TimeError::Parse(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn j2000_noon_utc() {
        let jd = local_to_jd_ut(at(2000, 1, 1, 12, 0, 0), 0.0);
        assert!((jd - 2_451_545.0).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn offset_shifts_ut() {
        // 17:30 IST == 12:00 UT
        let jd = local_to_jd_ut(at(2000, 1, 1, 17, 30, 0), 5.5);
        assert!((jd - 2_451_545.0).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn local_jd_roundtrip() {
        let local = at(2024, 3, 20, 6, 17, 42);
        let jd = local_to_jd_ut(local, 5.5);
        let back = jd_ut_to_local(jd, 5.5).unwrap();
        assert!(seconds_between(local, back).abs() < 0.002, "back = {back}");
    }

    #[test]
    fn negative_offset_crosses_date() {
        // 2024-01-01 01:00 UT is still Dec 31 in New York (UTC-5)
        let jd = local_to_jd_ut(at(2024, 1, 1, 1, 0, 0), 0.0);
        let ny = jd_ut_to_local(jd, -5.0).unwrap();
        assert_eq!(ny, at(2023, 12, 31, 20, 0, 0));
    }

    #[test]
    fn non_finite_jd_rejected() {
        assert!(matches!(
            jd_ut_to_local(f64::NAN, 0.0),
            Err(TimeError::OutOfRange(_))
        ));
        assert!(matches!(
            jd_ut_to_local(1.0e12, 0.0),
            Err(TimeError::OutOfRange(_))
        ));
    }

    #[test]
    fn seconds_between_is_signed() {
        let a = at(2024, 1, 1, 6, 0, 0);
        let b = at(2024, 1, 1, 18, 0, 0);
        assert_eq!(seconds_between(a, b), 43_200.0);
        assert_eq!(seconds_between(b, a), -43_200.0);
    }

    #[test]
    fn tz_validation() {
        assert!(validate_tz_offset(5.5).is_ok());
        assert!(validate_tz_offset(-14.0).is_ok());
        assert_eq!(validate_tz_offset(15.0), Err(TimeError::InvalidOffset(15.0)));
        assert!(validate_tz_offset(f64::INFINITY).is_err());
    }

    #[test]
    fn parse_accepts_common_forms() {
        let expected = at(2024, 3, 20, 6, 30, 0);
        assert_eq!(parse_local("2024-03-20T06:30:00").unwrap(), expected);
        assert_eq!(parse_local("2024-03-20 06:30").unwrap(), expected);
        assert_eq!(parse_local(" 2024-03-20T06:30 ").unwrap(), expected);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            parse_local("20/03/2024"),
            Err(TimeError::Parse("20/03/2024".to_string()))
        );
    }
}
