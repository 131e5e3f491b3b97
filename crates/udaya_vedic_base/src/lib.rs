//! Pure Vedic calculations shared by the day engine.
//!
//! This crate provides:
//! - Longitude classification into rashi, nakshatra and pada
//! - Graha and vaar (weekday) tables, including the weekday lords
//! - Ayanamsha for common sidereal reference systems
//! - An analytic Sun position and sunrise/sunset/twilight search
//!
//! Nothing here holds state; every function is a pure function of its inputs.

pub mod ayanamsha;
pub mod error;
pub mod graha;
pub mod nakshatra;
pub mod rashi;
pub mod riseset;
pub mod riseset_types;
pub mod solar;
pub mod util;
pub mod vaar;
pub mod zodiac;

pub use ayanamsha::{AyanamshaSystem, ayanamsha_deg, general_precession_deg};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude};
pub use riseset::{compute_all_events, compute_rise_set, local_clock_noon_jd};
pub use riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult};
pub use solar::{SunPosition, mean_obliquity_deg, sun_position};
pub use util::{BOUNDARY_EPSILON_DEG, normalize_360};
pub use vaar::{ALL_VAARS, Vaar, vaar_from_jd};
pub use zodiac::{ZodiacPosition, classify};
