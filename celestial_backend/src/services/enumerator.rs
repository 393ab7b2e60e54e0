//! Event enumeration for one calendar year.
//!
//! Each [`EventCategory`] knows how to detect its own events through an
//! [`Ephemeris`]; [`enumerate_events`] runs all four and collects the results
//! into a single deduplicated [`EventSet`]. All state lives in the call, so
//! two runs with the same inputs produce the same set.
//!
//! The year window is local: it runs from local midnight on January 1 to local
//! midnight on the following January 1, and every instant is projected with
//! [`local_date`] before its date is recorded.

use chrono::{Datelike, FixedOffset, NaiveDate, Offset, Utc};
use log::{debug, info, warn};

use crate::ephemeris::{Body, Ephemeris};
use crate::models::{
    local_date, Event, EventKind, EventSet, MeteorShower, ModifiedJulianDate, MoonPhase, Planet,
    SeasonMarker,
};

/// UTC+05:30, the offset reminders are delivered in unless configured otherwise
const DEFAULT_OFFSET_SECONDS: i32 = 5 * 3600 + 30 * 60;

/// A meteor shower peak pinned to a month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeteorShowerPeak {
    pub shower: MeteorShower,
    pub month: u32,
    pub day: u32,
}

impl MeteorShowerPeak {
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

/// Tunables for a single enumeration run.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumerationSettings {
    /// Local timezone that decides which calendar date an instant falls on.
    pub utc_offset: FixedOffset,
    /// How far past the earliest found phase the lunar cursor jumps.
    pub cursor_epsilon: qtty::Days,
    /// Maximum distance from π between planet and Sun longitudes.
    pub opposition_tolerance: qtty::Radians,
    pub opposition_step: qtty::Days,
    pub planets: Vec<Planet>,
    pub meteor_showers: Vec<MeteorShowerPeak>,
}

impl Default for EnumerationSettings {
    fn default() -> Self {
        Self {
            utc_offset: FixedOffset::east_opt(DEFAULT_OFFSET_SECONDS).unwrap_or_else(|| Utc.fix()),
            cursor_epsilon: qtty::Days::new(1.0),
            opposition_tolerance: qtty::Radians::new(0.05),
            opposition_step: qtty::Days::new(10.0),
            planets: Planet::DEFAULT_TRACKED.to_vec(),
            meteor_showers: MeteorShower::ALL
                .iter()
                .map(|&shower| {
                    let (month, day) = shower.default_peak();
                    MeteorShowerPeak { shower, month, day }
                })
                .collect(),
        }
    }
}

impl EnumerationSettings {
    /// Default settings with a different local timezone.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            utc_offset: offset,
            ..Self::default()
        }
    }
}

/// The four recurring kinds of celestial event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    MoonPhases,
    Seasons,
    Oppositions,
    MeteorShowers,
}

/// UTC instants bounding one local calendar year.
#[derive(Debug, Clone, Copy)]
struct YearWindow {
    year: i32,
    start: ModifiedJulianDate,
    end: ModifiedJulianDate,
    offset: FixedOffset,
}

impl YearWindow {
    fn new(year: i32, offset: FixedOffset) -> Option<Self> {
        let shift = qtty::Days::new(-f64::from(offset.local_minus_utc()) / 86400.0);
        let start = ModifiedJulianDate::start_of_year(year)? + shift;
        let end = ModifiedJulianDate::start_of_year(year.checked_add(1)?)? + shift;
        Some(Self {
            year,
            start,
            end,
            offset,
        })
    }

    /// Local date of `instant` if it falls inside the year.
    fn date_of(&self, instant: ModifiedJulianDate) -> Option<NaiveDate> {
        let date = local_date(instant, self.offset);
        (date.year() == self.year).then_some(date)
    }
}

impl EventCategory {
    pub const ALL: [EventCategory; 4] = [
        EventCategory::MoonPhases,
        EventCategory::Seasons,
        EventCategory::Oppositions,
        EventCategory::MeteorShowers,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EventCategory::MoonPhases => "moon phases",
            EventCategory::Seasons => "seasons",
            EventCategory::Oppositions => "oppositions",
            EventCategory::MeteorShowers => "meteor showers",
        }
    }

    /// Detect every event of this category whose local date lies in `year`.
    ///
    /// The result holds no duplicate (date, kind) pairs and keeps discovery
    /// order. A year outside the supported calendar range yields nothing.
    pub fn detect<E: Ephemeris + ?Sized>(
        &self,
        ephemeris: &E,
        year: i32,
        settings: &EnumerationSettings,
    ) -> Vec<Event> {
        let Some(window) = YearWindow::new(year, settings.utc_offset) else {
            warn!("Year {} is outside the supported calendar range", year);
            return Vec::new();
        };

        let events = match self {
            EventCategory::MoonPhases => detect_moon_phases(ephemeris, &window, settings),
            EventCategory::Seasons => detect_seasons(ephemeris, &window),
            EventCategory::Oppositions => detect_oppositions(ephemeris, &window, settings),
            EventCategory::MeteorShowers => detect_meteor_showers(&window, settings),
        };

        info!("Found {} {} in {}", events.len(), self.name(), year);
        events.into_vec()
    }
}

fn record(events: &mut EventSet, date: NaiveDate, kind: EventKind) {
    if events.insert(Event::new(date, kind)) {
        debug!("{}: {}", date, kind);
    }
}

/// Walk the lunar phases forward from the start of the window.
///
/// Every pass asks for the next occurrence of all four phases and then jumps
/// the cursor just past the earliest one, so the same occurrence is seen on
/// several passes and the set drops the repeats.
fn detect_moon_phases<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    window: &YearWindow,
    settings: &EnumerationSettings,
) -> EventSet {
    let mut events = EventSet::new();
    let mut cursor = window.start;

    while cursor < window.end {
        let mut earliest: Option<ModifiedJulianDate> = None;

        for phase in MoonPhase::ALL {
            let instant = match ephemeris.next_moon_phase(phase, cursor) {
                Ok(instant) => instant,
                Err(e) => {
                    debug!("No {} after MJD {:.5}: {}", phase.name(), cursor.value(), e);
                    continue;
                }
            };

            if let Some(date) = window.date_of(instant) {
                record(&mut events, date, EventKind::MoonPhase(phase));
            }
            if earliest.map_or(true, |e| instant < e) {
                earliest = Some(instant);
            }
        }

        match earliest {
            Some(instant) => cursor = instant + settings.cursor_epsilon,
            None => break,
        }
    }

    events
}

/// One query per season marker, anchored at the start of the window.
fn detect_seasons<E: Ephemeris + ?Sized>(ephemeris: &E, window: &YearWindow) -> EventSet {
    let mut events = EventSet::new();

    for marker in SeasonMarker::ALL {
        match ephemeris.next_season(marker, window.start) {
            Ok(instant) => {
                if let Some(date) = window.date_of(instant) {
                    record(&mut events, date, EventKind::Season(marker));
                }
            }
            Err(e) => warn!("Skipping {} for {}: {}", marker.name(), window.year, e),
        }
    }

    events
}

/// Step through the year looking for each planet opposite the Sun.
///
/// Only the first sample within tolerance is kept per planet. A planet whose
/// position cannot be computed is skipped for the rest of the year.
fn detect_oppositions<E: Ephemeris + ?Sized>(
    ephemeris: &E,
    window: &YearWindow,
    settings: &EnumerationSettings,
) -> EventSet {
    let mut events = EventSet::new();
    let target = std::f64::consts::PI;

    if settings.opposition_step.value() <= 0.0 {
        warn!(
            "Opposition step must be positive, got {} days",
            settings.opposition_step.value()
        );
        return events;
    }

    for &planet in &settings.planets {
        // Sample at local noon so no sample sits on a date boundary
        let mut t = window.start + qtty::Days::new(0.5);

        while t < window.end {
            let separation = ephemeris
                .ecliptic_longitude(Body::Planet(planet), t)
                .and_then(|lon| {
                    let sun = ephemeris.ecliptic_longitude(Body::Sun, t)?;
                    Ok(lon.abs_separation(sun))
                });

            let separation = match separation {
                Ok(separation) => separation,
                Err(e) => {
                    warn!("Skipping {} oppositions for {}: {}", planet.name(), window.year, e);
                    break;
                }
            };

            if (separation.value() - target).abs() <= settings.opposition_tolerance.value() {
                if let Some(date) = window.date_of(t) {
                    record(&mut events, date, EventKind::Opposition(planet));
                }
                break;
            }

            t = t + settings.opposition_step;
        }
    }

    events
}

fn detect_meteor_showers(window: &YearWindow, settings: &EnumerationSettings) -> EventSet {
    let mut events = EventSet::new();

    for peak in &settings.meteor_showers {
        match peak.date_in(window.year) {
            Some(date) => record(&mut events, date, EventKind::MeteorShower(peak.shower)),
            None => debug!(
                "{} peak {}-{} does not exist in {}",
                peak.shower.name(),
                peak.month,
                peak.day,
                window.year
            ),
        }
    }

    events
}

/// Enumerate every celestial event whose local date falls in `year`.
///
/// Categories run in the order of [`EventCategory::ALL`]; the returned set
/// keeps that discovery order and holds each (date, kind) pair once.
///
/// # Example
/// ```
/// use celestial_reminders::ephemeris::ScriptedEphemeris;
/// use celestial_reminders::services::{enumerate_events, EnumerationSettings};
///
/// let events = enumerate_events(2025, &ScriptedEphemeris::new(), &EnumerationSettings::default());
/// // Only the fixed-date meteor showers need no ephemeris answers.
/// assert_eq!(events.len(), 6);
/// ```
pub fn enumerate_events<E: Ephemeris + ?Sized>(
    year: i32,
    ephemeris: &E,
    settings: &EnumerationSettings,
) -> EventSet {
    let mut events = EventSet::new();
    for category in EventCategory::ALL {
        events.extend(category.detect(ephemeris, year, settings));
    }
    info!("Enumerated {} celestial events for {}", events.len(), year);
    events
}

#[cfg(test)]
#[path = "enumerator_tests.rs"]
mod enumerator_tests;
