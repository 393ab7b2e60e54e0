//! Table-driven ephemeris with fixed answers.
//!
//! Lets callers pin exact event instants, including ones a few minutes either
//! side of local midnight, and force planetary failures.

use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use qtty::Radians;

use super::{Body, Ephemeris, EphemerisError, EphemerisResult};
use crate::models::{ModifiedJulianDate, MoonPhase, Planet, SeasonMarker};

/// Planet drift away from opposition in the scripted model (radians per day)
const DRIFT_RAD_PER_DAY: f64 = 0.01;

#[derive(Debug, Clone, Default)]
pub struct ScriptedEphemeris {
    phases: Vec<(MoonPhase, ModifiedJulianDate)>,
    seasons: Vec<(SeasonMarker, ModifiedJulianDate)>,
    oppositions: HashMap<Planet, ModifiedJulianDate>,
    failing: HashSet<Planet>,
}

impl ScriptedEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_phase(mut self, phase: MoonPhase, at: ModifiedJulianDate) -> Self {
        self.phases.push((phase, at));
        self
    }

    pub fn with_season(mut self, marker: SeasonMarker, at: ModifiedJulianDate) -> Self {
        self.seasons.push((marker, at));
        self
    }

    /// The planet sits exactly opposite the Sun at `at` and drifts linearly away.
    pub fn with_opposition(mut self, planet: Planet, at: ModifiedJulianDate) -> Self {
        self.oppositions.insert(planet, at);
        self
    }

    /// Every longitude query for `planet` fails with a convergence error.
    pub fn with_failure(mut self, planet: Planet) -> Self {
        self.failing.insert(planet);
        self
    }

    fn earliest_after<K: PartialEq + Copy>(
        table: &[(K, ModifiedJulianDate)],
        key: K,
        after: ModifiedJulianDate,
        label: &str,
    ) -> EphemerisResult<ModifiedJulianDate> {
        table
            .iter()
            .filter(|(k, t)| *k == key && *t > after)
            .map(|(_, t)| *t)
            .min_by(|a, b| a.value().total_cmp(&b.value()))
            .ok_or_else(|| {
                EphemerisError::NotFound(format!("no scripted {} after MJD {:.5}", label, after.value()))
            })
    }
}

impl Ephemeris for ScriptedEphemeris {
    fn next_moon_phase(
        &self,
        phase: MoonPhase,
        after: ModifiedJulianDate,
    ) -> EphemerisResult<ModifiedJulianDate> {
        Self::earliest_after(&self.phases, phase, after, phase.name())
    }

    fn next_season(
        &self,
        marker: SeasonMarker,
        after: ModifiedJulianDate,
    ) -> EphemerisResult<ModifiedJulianDate> {
        Self::earliest_after(&self.seasons, marker, after, marker.name())
    }

    fn ecliptic_longitude(
        &self,
        body: Body,
        at: ModifiedJulianDate,
    ) -> EphemerisResult<Radians> {
        let planet = match body {
            Body::Sun => return Ok(Radians::new(0.0)),
            Body::Planet(planet) => planet,
        };

        if self.failing.contains(&planet) {
            return Err(EphemerisError::Domain(format!(
                "no position scripted for {}",
                planet.name()
            )));
        }

        // Without a scripted opposition the planet stays in conjunction.
        let lon = match self.oppositions.get(&planet) {
            Some(opposition) => PI + (at - *opposition).value() * DRIFT_RAD_PER_DAY,
            None => 0.0,
        };
        Ok(Radians::new(lon).wrap_pos())
    }
}
