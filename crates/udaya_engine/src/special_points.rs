//! Aarudam, Udayam and Kavippu in one ordered computation.
//!
//! Udayam comes from [`UdayaLagnaInterpolator`]. Aarudam and Kavippu are
//! pluggable strategies: this crate defines their contracts and sequencing
//! only. Kavippu consumes the Udayam and Aarudam longitudes, so it always
//! runs last.

use log::debug;
use udaya_vedic_base::Rashi;

use crate::error::EngineError;
use crate::moment::QueryMoment;
use crate::special_points_types::{SpecialPoint, SpecialPointKind};
use crate::udayam::UdayaLagnaInterpolator;
use crate::vedic_day_types::SunTimesTriad;

/// Birth-time-derived Aarudam.
pub trait AarudamFormula {
    fn aarudam(&self, birth: &QueryMoment) -> Result<SpecialPoint, EngineError>;
}

impl<F> AarudamFormula for F
where
    F: Fn(&QueryMoment) -> Result<SpecialPoint, EngineError>,
{
    fn aarudam(&self, birth: &QueryMoment) -> Result<SpecialPoint, EngineError> {
        self(birth)
    }
}

/// Kavippu from the solar sign and the Udayam and Aarudam longitudes.
pub trait KavippuFormula {
    /// `sun_sign` is already validated to 1..=12.
    fn kavippu(
        &self,
        sun_sign: u8,
        udayam_longitude: f64,
        aarudam_longitude: f64,
    ) -> Result<SpecialPoint, EngineError>;
}

impl<F> KavippuFormula for F
where
    F: Fn(u8, f64, f64) -> Result<SpecialPoint, EngineError>,
{
    fn kavippu(
        &self,
        sun_sign: u8,
        udayam_longitude: f64,
        aarudam_longitude: f64,
    ) -> Result<SpecialPoint, EngineError> {
        self(sun_sign, udayam_longitude, aarudam_longitude)
    }
}

/// A longitude obtained elsewhere (almanac, another program, user input),
/// usable as either strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuppliedLongitude(pub f64);

impl AarudamFormula for SuppliedLongitude {
    fn aarudam(&self, _birth: &QueryMoment) -> Result<SpecialPoint, EngineError> {
        Ok(SpecialPoint::new(SpecialPointKind::Aarudam, self.0))
    }
}

impl KavippuFormula for SuppliedLongitude {
    fn kavippu(&self, _: u8, _: f64, _: f64) -> Result<SpecialPoint, EngineError> {
        Ok(SpecialPoint::new(SpecialPointKind::Kavippu, self.0))
    }
}

/// Produces the three special points in display order.
#[derive(Debug, Clone)]
pub struct SpecialPointAggregator<A, K> {
    aarudam: A,
    kavippu: K,
}

impl<A: AarudamFormula, K: KavippuFormula> SpecialPointAggregator<A, K> {
    pub fn new(aarudam: A, kavippu: K) -> Self {
        Self { aarudam, kavippu }
    }

    /// `[Aarudam, Udayam, Kavippu]` for `moment`, recomputed on every call.
    ///
    /// `sun_sign` must be 1..=12 and `moment.local` must lie inside `triad`;
    /// nothing is computed when either check fails.
    pub fn compute(
        &self,
        moment: &QueryMoment,
        sun_longitude: f64,
        sun_sign: u8,
        triad: &SunTimesTriad,
    ) -> Result<[SpecialPoint; 3], EngineError> {
        let sun_rashi = Rashi::from_number(sun_sign).ok_or(EngineError::InvalidSign(sun_sign))?;
        let interpolator = UdayaLagnaInterpolator::from_triad(*triad, sun_longitude);
        let udayam = interpolator.at_moment(moment.local)?;
        let aarudam = self.aarudam.aarudam(moment)?;
        let kavippu = self
            .kavippu
            .kavippu(sun_sign, udayam.longitude, aarudam.longitude)?;
        debug!(
            "special points (sun in {}): aarudam {:.4}, udayam {:.4}, kavippu {:.4}",
            sun_rashi.name(),
            aarudam.longitude,
            udayam.longitude,
            kavippu.longitude
        );
        Ok([aarudam, udayam, kavippu])
    }
}
