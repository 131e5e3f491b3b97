//! Chart snapshots: everything the engine produces for one query moment.

use log::debug;
use serde::Serialize;
use udaya_vedic_base::{AyanamshaSystem, ZodiacPosition, classify};

use crate::day_lord::{DayLord, day_lord_fixed_clock, day_lord_sunrise};
use crate::error::EngineError;
use crate::moment::QueryMoment;
use crate::providers::{EphemerisProvider, SunriseProvider};
use crate::special_points::{AarudamFormula, KavippuFormula, SpecialPointAggregator};
use crate::special_points_types::SpecialPoint;
use crate::vedic_day::VedicDayResolver;
use crate::vedic_day_types::VedicDay;

/// Result for one query moment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSnapshot {
    pub moment: QueryMoment,
    pub ayanamsha: AyanamshaSystem,
    pub vedic_day: VedicDay,
    /// Keyed on the vedic (sunrise) date.
    pub day_lord_sunrise: DayLord,
    /// Keyed on a 06:00 clock boundary, for planetary-hour tables.
    pub day_lord_fixed_clock: DayLord,
    /// Sidereal Sun at the moment.
    pub sun: ZodiacPosition,
    /// Aarudam, Udayam, Kavippu.
    pub points: [SpecialPoint; 3],
}

/// Wires the resolver, an ephemeris and the point strategies together.
#[derive(Debug)]
pub struct ChartEngine<S, E, A, K> {
    resolver: VedicDayResolver<S>,
    ephemeris: E,
    aggregator: SpecialPointAggregator<A, K>,
    ayanamsha: AyanamshaSystem,
}

impl<S, E, A, K> ChartEngine<S, E, A, K>
where
    S: SunriseProvider,
    E: EphemerisProvider,
    A: AarudamFormula,
    K: KavippuFormula,
{
    pub fn new(
        sun_times: S,
        ephemeris: E,
        aggregator: SpecialPointAggregator<A, K>,
        ayanamsha: AyanamshaSystem,
    ) -> Self {
        Self {
            resolver: VedicDayResolver::new(sun_times),
            ephemeris,
            aggregator,
            ayanamsha,
        }
    }

    pub fn resolver(&self) -> &VedicDayResolver<S> {
        &self.resolver
    }

    /// Resolve the vedic day, both day lords, the Sun and the special points.
    pub fn compute_chart(&self, moment: &QueryMoment) -> Result<ChartSnapshot, EngineError> {
        let vedic_day = self.resolver.resolve(moment)?;
        let sun_longitude = self.ephemeris.sun_longitude(moment, self.ayanamsha)?;
        let sun = classify(sun_longitude);
        let points = self
            .aggregator
            .compute(moment, sun.longitude, sun.sign, &vedic_day.triad)?;
        let snapshot = ChartSnapshot {
            moment: *moment,
            ayanamsha: self.ayanamsha,
            vedic_day,
            day_lord_sunrise: day_lord_sunrise(&vedic_day),
            day_lord_fixed_clock: day_lord_fixed_clock(moment.local)?,
            sun,
            points,
        };
        debug!(
            "chart for {}: vedic day {}, sun sign {}",
            moment.local, snapshot.vedic_day.date, sun.sign
        );
        Ok(snapshot)
    }

    /// Birth chart and horary (query) chart, each resolved on its own.
    pub fn compute_chart_pair(
        &self,
        birth: &QueryMoment,
        query: &QueryMoment,
    ) -> Result<(ChartSnapshot, ChartSnapshot), EngineError> {
        let birth_chart = self.compute_chart(birth)?;
        let query_chart = self.compute_chart(query)?;
        Ok((birth_chart, query_chart))
    }
}
