//! Types for computed special points.

use serde::Serialize;
use udaya_vedic_base::{ZodiacPosition, classify};

/// The three special points, in their display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpecialPointKind {
    Aarudam,
    Udayam,
    Kavippu,
}

impl SpecialPointKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aarudam => "Aarudam",
            Self::Udayam => "Udayam",
            Self::Kavippu => "Kavippu",
        }
    }
}

/// A named ecliptic point with its zodiac classification.
///
/// Built fresh per query and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpecialPoint {
    pub kind: SpecialPointKind,
    /// Sidereal longitude, [0, 360).
    pub longitude: f64,
    pub position: ZodiacPosition,
}

impl SpecialPoint {
    /// Classify `longitude` (any real value) as a point of `kind`.
    pub fn new(kind: SpecialPointKind, longitude: f64) -> Self {
        let position = classify(longitude);
        Self {
            kind,
            longitude: position.longitude,
            position,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

impl std::fmt::Display for SpecialPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {:.4} {}", self.name(), self.longitude, self.position)
    }
}
