//! Rashi (zodiac sign) and degrees-minutes-seconds within a sign.
//!
//! Twelve equal signs of 30 deg starting at Mesha (0 deg sidereal).
//! Classification is half-open: a longitude of exactly 30 deg belongs to
//! Vrishabha, the sign that starts there.

use serde::Serialize;

use crate::util::boundary_arcminutes;

/// Span of one rashi in arc-minutes.
const RASHI_SPAN_ARCMIN: f64 = 1800.0;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in zodiacal order.
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western name.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based sign number (Mesha = 1 .. Meena = 12).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Rashi for a 1-based sign number; `None` outside 1..=12.
    pub fn from_number(number: u8) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|i| ALL_RASHIS.get(i as usize).copied())
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    /// May carry a fractional part.
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:04.1}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Rashi position of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 0-based (Mesha = 0).
    pub rashi_index: u8,
    pub dms: Dms,
    /// Decimal degrees within the rashi, [0, 30).
    pub degrees_in_rashi: f64,
}

/// Decimal degrees from DMS.
pub fn dms_to_deg(dms: &Dms) -> f64 {
    dms.degrees as f64 + dms.minutes as f64 / 60.0 + dms.seconds / 3600.0
}

/// DMS from decimal degrees (sign is dropped).
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let degrees = d.floor();
    let minutes_f = (d - degrees) * 60.0;
    let minutes = minutes_f.floor();
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: (minutes_f - minutes) * 60.0,
    }
}

/// Rashi from a sidereal ecliptic longitude in degrees (any real value).
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let arcmin = boundary_arcminutes(sidereal_lon_deg);
    let rashi_index = ((arcmin / RASHI_SPAN_ARCMIN).floor() as u8).min(11);
    let degrees_in_rashi = (arcmin - rashi_index as f64 * RASHI_SPAN_ARCMIN) / 60.0;
    RashiInfo {
        rashi: ALL_RASHIS[rashi_index as usize],
        rashi_index,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}
