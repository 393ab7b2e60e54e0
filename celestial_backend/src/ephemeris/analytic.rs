//! Ephemeris backed by the analytic theories in `siderust`.
//!
//! - Earth and planets: VSOP87A, heliocentric, ecliptic and equinox of J2000
//! - Moon: ELP2000, geocentric ecliptic
//!
//! Lunar phases and oppositions compare two longitudes in the same frame.
//! Season markers need the Sun's longitude from the equinox of date, so the
//! general precession since J2000 and annual aberration are applied on top.

use qtty::{Degrees, Radians};
use siderust::astro::JulianDate;
use siderust::bodies::{Earth, Jupiter, Mars, Moon, Neptune, Saturn, Uranus};
use siderust::units::Kilometer;

use super::search::{find_next_transition, EPSILON_DAYS};
use super::{Body, Ephemeris, EphemerisError, EphemerisResult};
use crate::models::{ModifiedJulianDate, MoonPhase, Planet, SeasonMarker};

/// Lunar phase search: sampling step and horizon (days)
const MOON_STEP_DAYS: f64 = 1.0;
const MOON_HORIZON_DAYS: f64 = 35.0;

/// Season marker search: sampling step and horizon (days)
const SEASON_STEP_DAYS: f64 = 5.0;
const SEASON_HORIZON_DAYS: f64 = 370.0;

/// Annual aberration of the Sun's longitude (degrees)
const SOLAR_ABERRATION_DEG: f64 = -0.005_69;

/// Ecliptic (x, y) components of a siderust cartesian position.
macro_rules! ecliptic_xy {
    ($position:expr) => {{
        let position = $position;
        (position.x().value(), position.y().value())
    }};
}

/// General precession in longitude since J2000 (IAU 2006), in degrees.
fn precession_since_j2000(julian_centuries: f64) -> f64 {
    (5_028.796_195 * julian_centuries + 1.105_434_8 * julian_centuries * julian_centuries) / 3600.0
}

fn longitude_of(x: f64, y: f64, body: &str, t: ModifiedJulianDate) -> EphemerisResult<Radians> {
    let lon = y.atan2(x);
    if !lon.is_finite() || (x == 0.0 && y == 0.0) {
        return Err(EphemerisError::Domain(format!(
            "no ecliptic longitude for {} at MJD {:.5}",
            body,
            t.value()
        )));
    }
    Ok(Radians::new(lon).wrap_pos())
}

fn julian_date(t: ModifiedJulianDate) -> JulianDate {
    JulianDate::new(t.tt_julian_day())
}

/// Ephemeris answering from VSOP87 and ELP2000 through `siderust`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticEphemeris {
    moon_step_days: f64,
    season_step_days: f64,
}

impl Default for AnalyticEphemeris {
    fn default() -> Self {
        Self {
            moon_step_days: MOON_STEP_DAYS,
            season_step_days: SEASON_STEP_DAYS,
        }
    }
}

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Geocentric longitude of the Sun in the J2000 ecliptic frame.
    fn sun_longitude_j2000(&self, t: ModifiedJulianDate) -> EphemerisResult<Radians> {
        let (x, y) = ecliptic_xy!(Earth::vsop87a(julian_date(t)).position);
        longitude_of(-x, -y, "Sun", t)
    }

    fn planet_longitude_j2000(
        &self,
        planet: Planet,
        t: ModifiedJulianDate,
    ) -> EphemerisResult<Radians> {
        let jd = julian_date(t);
        let (x, y) = match planet {
            Planet::Mars => ecliptic_xy!(Mars::vsop87a(jd).position),
            Planet::Jupiter => ecliptic_xy!(Jupiter::vsop87a(jd).position),
            Planet::Saturn => ecliptic_xy!(Saturn::vsop87a(jd).position),
            Planet::Uranus => ecliptic_xy!(Uranus::vsop87a(jd).position),
            Planet::Neptune => ecliptic_xy!(Neptune::vsop87a(jd).position),
        };
        longitude_of(x, y, planet.name(), t)
    }

    /// Apparent geocentric longitude of the Sun from the equinox of date.
    pub fn sun_apparent_longitude(&self, t: ModifiedJulianDate) -> EphemerisResult<Degrees> {
        let j2000 = self.sun_longitude_j2000(t)?.to::<qtty::Degree>().value();
        let of_date = j2000 + precession_since_j2000(t.julian_centuries_tt()) + SOLAR_ABERRATION_DEG;
        Ok(Degrees::new(of_date).wrap_pos())
    }

    /// Geocentric longitude of the Moon in the J2000 ecliptic frame.
    pub fn moon_longitude(&self, t: ModifiedJulianDate) -> EphemerisResult<Degrees> {
        let (x, y) = ecliptic_xy!(Moon::get_geo_position::<Kilometer>(julian_date(t)));
        Ok(longitude_of(x, y, "Moon", t)?.to::<qtty::Degree>())
    }

    /// Moon − Sun elongation in `[0°, 360°)`: 0° new, 180° full.
    pub fn moon_elongation(&self, t: ModifiedJulianDate) -> EphemerisResult<Degrees> {
        let sun = self.sun_longitude_j2000(t)?.to::<qtty::Degree>();
        Ok((self.moon_longitude(t)? - sun).wrap_pos())
    }

    fn moon_quadrant(&self, mjd: f64) -> EphemerisResult<i64> {
        quadrant_of(self.moon_elongation(ModifiedJulianDate::new(mjd))?.value())
    }

    fn season_quadrant(&self, mjd: f64) -> EphemerisResult<i64> {
        quadrant_of(self.sun_apparent_longitude(ModifiedJulianDate::new(mjd))?.value())
    }
}

fn quadrant_of(degrees: f64) -> EphemerisResult<i64> {
    if !degrees.is_finite() {
        return Err(EphemerisError::Domain(format!("non-finite angle {}", degrees)));
    }
    Ok(((degrees / 90.0).floor() as i64).rem_euclid(4))
}

impl Ephemeris for AnalyticEphemeris {
    fn next_moon_phase(
        &self,
        phase: MoonPhase,
        after: ModifiedJulianDate,
    ) -> EphemerisResult<ModifiedJulianDate> {
        find_next_transition(
            after.value(),
            MOON_HORIZON_DAYS,
            self.moon_step_days,
            EPSILON_DAYS,
            phase.quadrant(),
            |mjd| self.moon_quadrant(mjd),
        )
        .map(ModifiedJulianDate::new)
    }

    fn next_season(
        &self,
        marker: SeasonMarker,
        after: ModifiedJulianDate,
    ) -> EphemerisResult<ModifiedJulianDate> {
        find_next_transition(
            after.value(),
            SEASON_HORIZON_DAYS,
            self.season_step_days,
            EPSILON_DAYS,
            marker.quadrant(),
            |mjd| self.season_quadrant(mjd),
        )
        .map(ModifiedJulianDate::new)
    }

    fn ecliptic_longitude(
        &self,
        body: Body,
        at: ModifiedJulianDate,
    ) -> EphemerisResult<Radians> {
        match body {
            Body::Sun => self.sun_longitude_j2000(at),
            Body::Planet(planet) => self.planet_longitude_j2000(planet, at),
        }
    }
}
