//! Error types for civil time conversions.

use thiserror::Error;

/// Errors from civil time parsing or Julian Date conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Timestamp text could not be parsed.
    #[error("cannot parse timestamp `{0}` (expected YYYY-MM-DDTHH:MM[:SS])")]
    Parse(String),
    /// Timezone offset outside [-14, +14] hours.
    #[error("timezone offset {0} h outside [-14, 14]")]
    InvalidOffset(f64),
    /// Julian Date cannot be represented as a calendar timestamp.
    #[error("julian date {0} outside the representable calendar range")]
    OutOfRange(f64),
}
