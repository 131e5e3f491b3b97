//! Civil time handling for the Vedic day engine.
//!
//! This crate provides:
//! - Julian Date helpers for calendar dates
//! - Local wall-clock (`NaiveDateTime` + timezone offset) ↔ JD UT conversion
//! - Greenwich/local mean sidereal time for rise/set hour angles

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{
    MAX_TZ_OFFSET_HOURS, date_to_jd_0h, jd_ut_to_local, local_to_jd_ut, parse_local,
    seconds_between, validate_tz_offset,
};
pub use error::TimeError;
pub use julian::{J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_centuries};
pub use sidereal::{
    SIDEREAL_RATE, earth_rotation_angle_rad, gmst_rad, hour_angle_rad, local_sidereal_time_rad,
};
