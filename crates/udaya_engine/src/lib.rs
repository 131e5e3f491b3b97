//! Vedic day and special-point engine.
//!
//! This crate provides:
//! - Sunrise-to-sunrise vedic day resolution with its sunrise/sunset triad
//! - Day lords under the sunrise and fixed 06:00 clock conventions
//! - Udayam interpolation across unequal day and night arcs
//! - Ordered Aarudam/Udayam/Kavippu computation with pluggable strategies
//! - Chart snapshots for birth and horary moments
//!
//! Sunrise/sunset and planetary longitudes are injected through
//! [`SunriseProvider`] and [`EphemerisProvider`]. The engine keeps no state
//! between calls.

pub mod chart;
pub mod day_lord;
pub mod error;
pub mod moment;
pub mod providers;
pub mod special_points;
pub mod special_points_types;
pub mod udayam;
pub mod vedic_day;
pub mod vedic_day_types;

pub use chart::{ChartEngine, ChartSnapshot};
pub use day_lord::{
    DayBoundary, DayLord, FIXED_CLOCK_DAY_START_HOUR, day_lord, day_lord_fixed_clock,
    day_lord_sunrise,
};
pub use error::EngineError;
pub use moment::QueryMoment;
pub use providers::{AnalyticEphemeris, AnalyticSunTimes, EphemerisProvider, SunriseProvider};
pub use special_points::{
    AarudamFormula, KavippuFormula, SpecialPointAggregator, SuppliedLongitude,
};
pub use special_points_types::{SpecialPoint, SpecialPointKind};
pub use udayam::{Arc, UdayaLagnaInterpolator};
pub use vedic_day::VedicDayResolver;
pub use vedic_day_types::{SunTimesTriad, VedicDay};
