//! Error types for Vedic base calculations.

use thiserror::Error;
use udaya_time::TimeError;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from civil time conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Ayanamsha name not recognised.
    #[error("unknown ayanamsha system `{0}`")]
    UnknownAyanamsha(String),
}
