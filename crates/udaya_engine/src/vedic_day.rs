//! Sunrise-to-sunrise day resolution.
//!
//! A civil moment before that date's sunrise belongs to the previous vedic
//! day; at or after sunrise it belongs to the civil date itself.

use chrono::NaiveDate;
use log::debug;

use crate::error::EngineError;
use crate::moment::QueryMoment;
use crate::providers::SunriseProvider;
use crate::vedic_day_types::{SunTimesTriad, VedicDay};

pub(crate) fn previous_date(date: NaiveDate) -> Result<NaiveDate, EngineError> {
    date.pred_opt().ok_or(EngineError::CalendarOverflow(date))
}

pub(crate) fn next_date(date: NaiveDate) -> Result<NaiveDate, EngineError> {
    date.succ_opt().ok_or(EngineError::CalendarOverflow(date))
}

/// Resolves query moments to vedic days using an injected sunrise provider.
///
/// Holds no state between calls; birth and horary charts resolve
/// independently through the same resolver.
#[derive(Debug, Clone, Default)]
pub struct VedicDayResolver<P> {
    provider: P,
}

impl<P: SunriseProvider> VedicDayResolver<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Vedic date and sunrise/sunset/next-sunrise triad containing `moment`.
    pub fn resolve(&self, moment: &QueryMoment) -> Result<VedicDay, EngineError> {
        let civil_date = moment.civil_date();
        let loc = &moment.location;
        let tz = moment.tz_offset_hours;
        let civil_sunrise = self.provider.sunrise(civil_date, loc, tz)?;

        let (date, sunrise, sunset, next_sunrise) = if moment.local < civil_sunrise {
            let vedic_date = previous_date(civil_date)?;
            debug!(
                "{} precedes sunrise {civil_sunrise}: vedic day {vedic_date}",
                moment.local
            );
            let sunrise = self.provider.sunrise(vedic_date, loc, tz)?;
            let sunset = self.provider.sunset(vedic_date, loc, tz)?;
            (vedic_date, sunrise, sunset, civil_sunrise)
        } else {
            debug!(
                "{} at or after sunrise {civil_sunrise}: vedic day {civil_date}",
                moment.local
            );
            let sunset = self.provider.sunset(civil_date, loc, tz)?;
            let next_sunrise = self.provider.sunrise(next_date(civil_date)?, loc, tz)?;
            (civil_date, civil_sunrise, sunset, next_sunrise)
        };

        let triad = SunTimesTriad::new(sunrise, sunset, next_sunrise)?;
        Ok(VedicDay {
            date,
            civil_date,
            triad,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
    use udaya_vedic_base::GeoLocation;

    use super::*;

    /// Same sunrise and sunset clock time every day.
    struct FixedClock {
        sunrise: NaiveTime,
        sunset: NaiveTime,
    }

    impl SunriseProvider for FixedClock {
        fn sunrise(&self, d: NaiveDate, _: &GeoLocation, _: f64) -> Result<NaiveDateTime, EngineError> {
            Ok(d.and_time(self.sunrise))
        }

        fn sunset(&self, d: NaiveDate, _: &GeoLocation, _: f64) -> Result<NaiveDateTime, EngineError> {
            Ok(d.and_time(self.sunset))
        }
    }

    /// Reports a sunset that precedes sunrise.
    struct Inverted;

    impl SunriseProvider for Inverted {
        fn sunrise(&self, d: NaiveDate, _: &GeoLocation, _: f64) -> Result<NaiveDateTime, EngineError> {
            Ok(d.and_hms_opt(18, 0, 0).unwrap())
        }

        fn sunset(&self, d: NaiveDate, _: &GeoLocation, _: f64) -> Result<NaiveDateTime, EngineError> {
            Ok(d.and_hms_opt(6, 0, 0).unwrap())
        }
    }

    fn resolver() -> VedicDayResolver<FixedClock> {
        VedicDayResolver::new(FixedClock {
            sunrise: NaiveTime::from_hms_opt(6, 10, 0).unwrap(),
            sunset: NaiveTime::from_hms_opt(18, 5, 0).unwrap(),
        })
    }

    fn moment(local: NaiveDateTime) -> QueryMoment {
        QueryMoment::new(local, GeoLocation::new(13.08, 80.27, 0.0), 5.5).unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn one_second_before_sunrise_is_previous_day() {
        let sunrise = date(20).and_hms_opt(6, 10, 0).unwrap();
        let day = resolver()
            .resolve(&moment(sunrise - TimeDelta::seconds(1)))
            .unwrap();
        assert_eq!(day.date, date(19));
        assert_eq!(day.civil_date, date(20));
        assert!(day.before_civil_sunrise());
        assert_eq!(day.triad.sunrise(), date(19).and_hms_opt(6, 10, 0).unwrap());
        assert_eq!(day.triad.sunset(), date(19).and_hms_opt(18, 5, 0).unwrap());
        assert_eq!(day.triad.next_sunrise(), sunrise);
    }

    #[test]
    fn exactly_at_sunrise_is_current_day() {
        let sunrise = date(20).and_hms_opt(6, 10, 0).unwrap();
        let day = resolver().resolve(&moment(sunrise)).unwrap();
        assert_eq!(day.date, date(20));
        assert_eq!(day.triad.sunrise(), sunrise);
        assert_eq!(day.triad.next_sunrise(), date(21).and_hms_opt(6, 10, 0).unwrap());
    }

    #[test]
    fn late_evening_is_current_day() {
        let t = date(20).and_hms_opt(23, 59, 59).unwrap();
        let day = resolver().resolve(&moment(t)).unwrap();
        assert_eq!(day.date, date(20));
        assert!(day.contains(t));
    }

    #[test]
    fn resolved_moment_always_inside_its_triad() {
        let r = resolver();
        let start = date(1).and_hms_opt(0, 0, 0).unwrap();
        for step in 0..(48 * 4) {
            let t = start + TimeDelta::minutes(15 * step);
            let day = r.resolve(&moment(t)).unwrap();
            assert!(day.contains(t), "{t} not inside {:?}", day.triad);
            assert!(day.triad.sunrise() < day.triad.sunset());
            assert!(day.triad.sunset() < day.triad.next_sunrise());
        }
    }

    #[test]
    fn non_monotonic_provider_is_reported() {
        let r = VedicDayResolver::new(Inverted);
        let t = date(20).and_hms_opt(19, 0, 0).unwrap();
        assert!(matches!(
            r.resolve(&moment(t)),
            Err(EngineError::NonMonotonicTriad { .. })
        ));
    }
}
