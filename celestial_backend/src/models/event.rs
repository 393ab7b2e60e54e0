//! Event vocabulary and the deduplicated event set.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::time::iso_date;

/// The four principal lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MoonPhase {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
}

impl MoonPhase {
    pub const ALL: [MoonPhase; 4] = [
        MoonPhase::Full,
        MoonPhase::New,
        MoonPhase::FirstQuarter,
        MoonPhase::LastQuarter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::New => "New Moon",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::Full => "Full Moon",
            MoonPhase::LastQuarter => "Last Quarter",
        }
    }

    /// Index of the 90° quadrant of Moon−Sun elongation this phase starts.
    pub fn quadrant(&self) -> i64 {
        match self {
            MoonPhase::New => 0,
            MoonPhase::FirstQuarter => 1,
            MoonPhase::Full => 2,
            MoonPhase::LastQuarter => 3,
        }
    }
}

/// Equinoxes and solstices, named for the northern hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SeasonMarker {
    MarchEquinox,
    JuneSolstice,
    SeptemberEquinox,
    DecemberSolstice,
}

impl SeasonMarker {
    pub const ALL: [SeasonMarker; 4] = [
        SeasonMarker::MarchEquinox,
        SeasonMarker::JuneSolstice,
        SeasonMarker::SeptemberEquinox,
        SeasonMarker::DecemberSolstice,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SeasonMarker::MarchEquinox => "Vernal Equinox",
            SeasonMarker::JuneSolstice => "Summer Solstice",
            SeasonMarker::SeptemberEquinox => "Autumnal Equinox",
            SeasonMarker::DecemberSolstice => "Winter Solstice",
        }
    }

    /// Index of the 90° quadrant of solar longitude this marker starts.
    pub fn quadrant(&self) -> i64 {
        match self {
            SeasonMarker::MarchEquinox => 0,
            SeasonMarker::JuneSolstice => 1,
            SeasonMarker::SeptemberEquinox => 2,
            SeasonMarker::DecemberSolstice => 3,
        }
    }
}

/// Planets whose oppositions can be tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Planet {
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    pub const ALL: [Planet; 5] = [
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Planets scanned when nothing else is configured.
    pub const DEFAULT_TRACKED: [Planet; 4] =
        [Planet::Mars, Planet::Jupiter, Planet::Saturn, Planet::Uranus];

    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }

    pub fn opposition_name(&self) -> &'static str {
        match self {
            Planet::Mars => "Mars Opposition",
            Planet::Jupiter => "Jupiter Opposition",
            Planet::Saturn => "Saturn Opposition",
            Planet::Uranus => "Uranus Opposition",
            Planet::Neptune => "Neptune Opposition",
        }
    }

    pub fn from_name(name: &str) -> Option<Planet> {
        Planet::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Annual meteor showers with a calendar-fixed peak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MeteorShower {
    Quadrantids,
    Lyrids,
    EtaAquariids,
    Perseids,
    Orionids,
    Geminids,
}

impl MeteorShower {
    pub const ALL: [MeteorShower; 6] = [
        MeteorShower::Quadrantids,
        MeteorShower::Lyrids,
        MeteorShower::EtaAquariids,
        MeteorShower::Perseids,
        MeteorShower::Orionids,
        MeteorShower::Geminids,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MeteorShower::Quadrantids => "Quadrantids Meteor Shower",
            MeteorShower::Lyrids => "Lyrids Meteor Shower",
            MeteorShower::EtaAquariids => "Eta Aquariids Meteor Shower",
            MeteorShower::Perseids => "Perseids Meteor Shower",
            MeteorShower::Orionids => "Orionids Meteor Shower",
            MeteorShower::Geminids => "Geminids Meteor Shower",
        }
    }

    /// Typical peak night as (month, day).
    pub fn default_peak(&self) -> (u32, u32) {
        match self {
            MeteorShower::Quadrantids => (1, 3),
            MeteorShower::Lyrids => (4, 22),
            MeteorShower::EtaAquariids => (5, 6),
            MeteorShower::Perseids => (8, 12),
            MeteorShower::Orionids => (10, 21),
            MeteorShower::Geminids => (12, 14),
        }
    }

    /// Accepts either the full event name or the bare shower name.
    pub fn from_name(name: &str) -> Option<MeteorShower> {
        let needle = name.trim();
        MeteorShower::ALL.into_iter().find(|s| {
            s.name().eq_ignore_ascii_case(needle)
                || s.name()
                    .trim_end_matches(" Meteor Shower")
                    .eq_ignore_ascii_case(needle)
        })
    }
}

/// Closed vocabulary of reminder-worthy events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventKind {
    MoonPhase(MoonPhase),
    Season(SeasonMarker),
    Opposition(Planet),
    MeteorShower(MeteorShower),
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::MoonPhase(phase) => phase.name(),
            EventKind::Season(marker) => marker.name(),
            EventKind::Opposition(planet) => planet.opposition_name(),
            EventKind::MeteorShower(shower) => shower.name(),
        }
    }

    /// Every event kind in the vocabulary.
    pub fn all() -> Vec<EventKind> {
        MoonPhase::ALL
            .into_iter()
            .map(EventKind::MoonPhase)
            .chain(SeasonMarker::ALL.into_iter().map(EventKind::Season))
            .chain(Planet::ALL.into_iter().map(EventKind::Opposition))
            .chain(MeteorShower::ALL.into_iter().map(EventKind::MeteorShower))
            .collect()
    }

    pub fn from_name(name: &str) -> Option<EventKind> {
        EventKind::all().into_iter().find(|k| k.name() == name)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One observation: an event kind on a local calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub date: NaiveDate,
    pub kind: EventKind,
}

impl Event {
    pub fn new(date: NaiveDate, kind: EventKind) -> Self {
        Self { date, kind }
    }

    pub fn iso_date(&self) -> String {
        iso_date(self.date)
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Insertion-ordered set of events, unique on (date, kind).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventSet {
    events: Vec<Event>,
    seen: HashSet<(NaiveDate, EventKind)>,
}

impl EventSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an event, returning `false` when (date, kind) was already present.
    pub fn insert(&mut self, event: Event) -> bool {
        if !self.seen.insert((event.date, event.kind)) {
            return false;
        }
        self.events.push(event);
        true
    }

    /// Insert every event, returning how many were new.
    pub fn extend<I: IntoIterator<Item = Event>>(&mut self, events: I) -> usize {
        events
            .into_iter()
            .map(|e| self.insert(e))
            .filter(|inserted| *inserted)
            .count()
    }

    pub fn contains(&self, date: NaiveDate, kind: EventKind) -> bool {
        self.seen.contains(&(date, kind))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_vec(self) -> Vec<Event> {
        self.events
    }
}

impl<'a> IntoIterator for &'a EventSet {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}
