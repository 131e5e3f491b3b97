//! Full zodiac classification of an ecliptic longitude.
//!
//! One pure function shared by every computed point (planets, Udayam,
//! Aarudam, Kavippu): sign, degree within sign, nakshatra and pada.

use serde::Serialize;

use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Dms, Rashi, rashi_from_longitude};
use crate::util::boundary_arcminutes;

/// Zodiac position derived from a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZodiacPosition {
    /// Longitude normalized to [0, 360).
    pub longitude: f64,
    pub rashi: Rashi,
    /// 1-based sign number (Mesha = 1).
    pub sign: u8,
    /// Degrees within the sign, [0, 30).
    pub degrees_in_sign: f64,
    pub dms: Dms,
    pub nakshatra: Nakshatra,
    /// 1-based nakshatra number (Ashwini = 1).
    pub nakshatra_number: u8,
    /// Quarter within the nakshatra, 1-4.
    pub pada: u8,
}

/// Classify any real longitude. Total over finite inputs.
///
/// `longitude` is taken from the same boundary-snapped arc-minutes as the
/// sign and nakshatra, so a value a hair below 360 deg reads as 0 deg Mesha
/// in every field.
pub fn classify(longitude_deg: f64) -> ZodiacPosition {
    let rashi = rashi_from_longitude(longitude_deg);
    let nak = nakshatra_from_longitude(longitude_deg);
    ZodiacPosition {
        longitude: boundary_arcminutes(longitude_deg) / 60.0,
        rashi: rashi.rashi,
        sign: rashi.rashi_index + 1,
        degrees_in_sign: rashi.degrees_in_rashi,
        dms: rashi.dms,
        nakshatra: nak.nakshatra,
        nakshatra_number: nak.nakshatra_index + 1,
        pada: nak.pada,
    }
}

impl std::fmt::Display for ZodiacPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({} pada {})",
            self.rashi.name(),
            self.dms,
            self.nakshatra.name(),
            self.pada
        )
    }
}
