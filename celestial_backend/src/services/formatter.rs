//! Event descriptions and day messages.
//!
//! A message line is `"<event name> — <description>"`. Names outside the
//! catalog get [`FALLBACK_DESCRIPTION`], so formatting never fails.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;

use crate::models::{EventKind, MeteorShower, MoonPhase, Planet, SeasonMarker};

/// Description used for any event name the catalog does not know.
pub const FALLBACK_DESCRIPTION: &str = "A notable celestial event worth marking.";

/// Separator between event lines within one day's message.
pub const DAY_MESSAGE_SEPARATOR: &str = "\n\n";

static DEFAULT_CATALOG: Lazy<EventCatalog> = Lazy::new(EventCatalog::builtin);

fn moon_description(phase: MoonPhase) -> &'static str {
    match phase {
        MoonPhase::New => {
            "The sky is dark and the moon is hidden — a time for new beginnings and setting intentions."
        }
        MoonPhase::FirstQuarter => {
            "Half the moon is lit and waxing — a time for decisions, effort, and momentum."
        }
        MoonPhase::Full => {
            "The moon is at peak illumination — a time for release, reflection, and culmination."
        }
        MoonPhase::LastQuarter => {
            "Half the moon is lit and waning — a time to let go, review, and rest."
        }
    }
}

fn season_description(marker: SeasonMarker) -> &'static str {
    match marker {
        SeasonMarker::MarchEquinox => {
            "Day and night are nearly equal as the Sun crosses the equator heading north."
        }
        SeasonMarker::JuneSolstice => {
            "The Sun reaches its northernmost point — the longest day in the northern hemisphere."
        }
        SeasonMarker::SeptemberEquinox => {
            "Day and night are nearly equal as the Sun crosses the equator heading south."
        }
        SeasonMarker::DecemberSolstice => {
            "The Sun reaches its southernmost point — the shortest day in the northern hemisphere."
        }
    }
}

fn opposition_description(planet: Planet) -> &'static str {
    match planet {
        Planet::Mars => "Mars is opposite the Sun, at its closest and brightest — up all night.",
        Planet::Jupiter => {
            "Jupiter is opposite the Sun and shines all night; its moons are easy in binoculars."
        }
        Planet::Saturn => {
            "Saturn is opposite the Sun and at its best for the year; look for the rings."
        }
        Planet::Uranus => {
            "Uranus is opposite the Sun — faintly visible to the naked eye under dark skies."
        }
        Planet::Neptune => "Neptune is opposite the Sun — a telescope target all night long.",
    }
}

fn shower_description(shower: MeteorShower) -> &'static str {
    match shower {
        MeteorShower::Quadrantids => {
            "A short, sharp peak of bright meteors radiating from near the Big Dipper."
        }
        MeteorShower::Lyrids => "One of the oldest recorded showers, with occasional bright fireballs.",
        MeteorShower::EtaAquariids => {
            "Fast meteors from Halley's Comet debris, best in the hours before dawn."
        }
        MeteorShower::Perseids => {
            "The year's most popular shower — dozens of swift, bright meteors per hour."
        }
        MeteorShower::Orionids => "Fast meteors from Halley's Comet streaking out of Orion.",
        MeteorShower::Geminids => {
            "The strongest shower of the year, with bright, slow, multicoloured meteors."
        }
    }
}

fn builtin_description(kind: EventKind) -> &'static str {
    match kind {
        EventKind::MoonPhase(phase) => moon_description(phase),
        EventKind::Season(marker) => season_description(marker),
        EventKind::Opposition(planet) => opposition_description(planet),
        EventKind::MeteorShower(shower) => shower_description(shower),
    }
}

/// Mapping from event name to a one-line description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCatalog {
    descriptions: HashMap<String, String>,
}

impl Default for EventCatalog {
    fn default() -> Self {
        DEFAULT_CATALOG.clone()
    }
}

impl EventCatalog {
    /// Catalog covering every name in the event vocabulary.
    pub fn builtin() -> Self {
        let descriptions = EventKind::all()
            .into_iter()
            .map(|kind| (kind.name().to_string(), builtin_description(kind).to_string()))
            .collect();
        Self { descriptions }
    }

    /// Built-in catalog with `overrides` replacing or adding descriptions.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Self {
        let mut catalog = Self::builtin();
        for (name, description) in overrides {
            catalog
                .descriptions
                .insert(name.clone(), description.trim().to_string());
        }
        catalog
    }

    pub fn contains(&self, name: &str) -> bool {
        self.descriptions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }

    pub fn description(&self, name: &str) -> &str {
        self.descriptions
            .get(name)
            .map(String::as_str)
            .unwrap_or(FALLBACK_DESCRIPTION)
    }

    /// Render one event line, e.g. `"Comet Flyby — A notable celestial event worth marking."`.
    pub fn format(&self, name: &str) -> String {
        format!("{} — {}", name, self.description(name))
    }

    /// Join the lines for several same-day events, keeping their order.
    pub fn day_message<'a, I>(&self, names: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .map(|name| self.format(name))
            .collect::<Vec<_>>()
            .join(DAY_MESSAGE_SEPARATOR)
    }
}

/// Format `name` against the built-in catalog.
pub fn format(name: &str) -> String {
    DEFAULT_CATALOG.format(name)
}
