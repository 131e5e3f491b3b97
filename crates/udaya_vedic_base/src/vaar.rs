//! Vaar (weekday) and its ruling graha.
//!
//! The classical planetary week: each weekday is ruled by one of the seven
//! sapta grahas, Sunday by Surya through Saturday by Shani.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::graha::Graha;

/// The 7 weekdays, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

/// All 7 vaars, Sunday first.
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// 0-based index (Ravivaar = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ruling graha of the weekday.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Ravivaar => Graha::Surya,
            Self::Somvaar => Graha::Chandra,
            Self::Mangalvaar => Graha::Mangal,
            Self::Budhvaar => Graha::Buddh,
            Self::Guruvaar => Graha::Guru,
            Self::Shukravaar => Graha::Shukra,
            Self::Shanivaar => Graha::Shani,
        }
    }

    pub const fn from_weekday(weekday: Weekday) -> Self {
        ALL_VAARS[weekday.num_days_from_sunday() as usize]
    }

    /// Vaar of a civil calendar date.
    pub fn of_date(date: NaiveDate) -> Self {
        Self::from_weekday(date.weekday())
    }
}

/// Vaar of the civil day containing a Julian Date (UT, Greenwich).
pub fn vaar_from_jd(jd: f64) -> Vaar {
    let day = (jd + 1.5).floor() as i64;
    ALL_VAARS[day.rem_euclid(7) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classical_table() {
        assert_eq!(Vaar::Ravivaar.lord(), Graha::Surya);
        assert_eq!(Vaar::Somvaar.lord(), Graha::Chandra);
        assert_eq!(Vaar::Mangalvaar.lord(), Graha::Mangal);
        assert_eq!(Vaar::Budhvaar.lord(), Graha::Buddh);
        assert_eq!(Vaar::Guruvaar.lord(), Graha::Guru);
        assert_eq!(Vaar::Shukravaar.lord(), Graha::Shukra);
        assert_eq!(Vaar::Shanivaar.lord(), Graha::Shani);
    }

    #[test]
    fn chrono_weekday_mapping() {
        assert_eq!(Vaar::from_weekday(Weekday::Sun), Vaar::Ravivaar);
        assert_eq!(Vaar::from_weekday(Weekday::Sat), Vaar::Shanivaar);
        // 2024-03-20 was a Wednesday
        let date = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
        assert_eq!(Vaar::of_date(date), Vaar::Budhvaar);
    }

    #[test]
    fn jd_weekday() {
        // J2000.0 = Saturday 2000-01-01 12:00
        assert_eq!(vaar_from_jd(2_451_545.0), Vaar::Shanivaar);
        // 0h UT of the same day is still Saturday
        assert_eq!(vaar_from_jd(2_451_544.5), Vaar::Shanivaar);
        assert_eq!(vaar_from_jd(2_451_544.49), Vaar::Shukravaar);
    }

    #[test]
    fn indices_sequential() {
        for (i, v) in ALL_VAARS.iter().enumerate() {
            assert_eq!(v.index() as usize, i);
        }
    }
}
