//! Ephemeris adapter.
//!
//! The event enumerator never computes positions itself; it asks an
//! [`Ephemeris`] for the next instant of a lunar phase or season marker and for
//! ecliptic longitudes used in opposition detection. All instants are UTC
//! [`ModifiedJulianDate`] values.
//!
//! - [`AnalyticEphemeris`]: VSOP87 and ELP2000 positions from `siderust`
//! - [`ScriptedEphemeris`]: table-driven double with fixed answers

pub mod analytic;
pub mod scripted;
mod search;

pub use analytic::AnalyticEphemeris;
pub use scripted::ScriptedEphemeris;

use crate::models::{ModifiedJulianDate, MoonPhase, Planet, SeasonMarker};

/// Result type for ephemeris queries
pub type EphemerisResult<T> = Result<T, EphemerisError>;

/// Error type for ephemeris queries
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EphemerisError {
    #[error("Numerical domain error: {0}")]
    Domain(String),

    #[error("No event found: {0}")]
    NotFound(String),
}

/// Bodies whose ecliptic longitude can be queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    /// Direction of the Sun as seen from Earth.
    Sun,
    /// Heliocentric direction of a planet.
    Planet(Planet),
}

impl Body {
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Planet(planet) => planet.name(),
        }
    }
}

/// Astronomical oracle queried by the event enumerator.
pub trait Ephemeris {
    /// First occurrence of `phase` strictly after `after`.
    fn next_moon_phase(
        &self,
        phase: MoonPhase,
        after: ModifiedJulianDate,
    ) -> EphemerisResult<ModifiedJulianDate>;

    /// First occurrence of `marker` strictly after `after`.
    fn next_season(
        &self,
        marker: SeasonMarker,
        after: ModifiedJulianDate,
    ) -> EphemerisResult<ModifiedJulianDate>;

    /// Ecliptic longitude of `body` at `at`, in `[0, 2π)`.
    ///
    /// Planets are heliocentric and the Sun is geocentric, so a planet is at
    /// opposition when the two differ by π.
    fn ecliptic_longitude(
        &self,
        body: Body,
        at: ModifiedJulianDate,
    ) -> EphemerisResult<qtty::Radians>;

    fn next_full_moon(&self, after: ModifiedJulianDate) -> EphemerisResult<ModifiedJulianDate> {
        self.next_moon_phase(MoonPhase::Full, after)
    }

    fn next_new_moon(&self, after: ModifiedJulianDate) -> EphemerisResult<ModifiedJulianDate> {
        self.next_moon_phase(MoonPhase::New, after)
    }

    fn next_first_quarter(
        &self,
        after: ModifiedJulianDate,
    ) -> EphemerisResult<ModifiedJulianDate> {
        self.next_moon_phase(MoonPhase::FirstQuarter, after)
    }

    fn next_last_quarter(&self, after: ModifiedJulianDate) -> EphemerisResult<ModifiedJulianDate> {
        self.next_moon_phase(MoonPhase::LastQuarter, after)
    }
}
