//! Property tests for merging, formatting and enumeration.

use std::collections::{BTreeMap, HashSet};

use chrono::Datelike;
use proptest::prelude::*;

use celestial_reminders::ephemeris::ScriptedEphemeris;
use celestial_reminders::models::{ModifiedJulianDate, MoonPhase, Planet, ReminderMap, SeasonMarker};
use celestial_reminders::services::{
    enumerate_events, format, merge, merge_all, EnumerationSettings, FALLBACK_DESCRIPTION,
};

fn date_key() -> impl Strategy<Value = String> {
    (2024i32..=2026, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d))
}

fn reminder_map() -> impl Strategy<Value = ReminderMap> {
    prop::collection::btree_map(date_key(), "[a-zA-Z ]{1,20}", 0..20)
}

fn phase() -> impl Strategy<Value = MoonPhase> {
    prop::sample::select(MoonPhase::ALL.to_vec())
}

fn season() -> impl Strategy<Value = SeasonMarker> {
    prop::sample::select(SeasonMarker::ALL.to_vec())
}

fn planet() -> impl Strategy<Value = Planet> {
    prop::sample::select(Planet::ALL.to_vec())
}

/// MJD values from mid-2024 to mid-2026, so both year boundaries of 2025 are covered.
fn instant() -> impl Strategy<Value = ModifiedJulianDate> {
    (60460.0f64..61200.0).prop_map(ModifiedJulianDate::new)
}

proptest! {
    #[test]
    fn merge_keys_are_union_and_lengths_match_sources(a in reminder_map(), b in reminder_map()) {
        let merged = merge(&a, &b);

        let expected_keys: HashSet<&str> = a.keys().chain(b.keys()).map(String::as_str).collect();
        let merged_keys: HashSet<&str> = merged.dates().collect();
        prop_assert_eq!(&merged_keys, &expected_keys);

        for (date, messages) in merged.iter() {
            let in_a = a.get(date);
            let in_b = b.get(date);
            let expected_len = usize::from(in_a.is_some()) + usize::from(in_b.is_some());
            prop_assert_eq!(messages.len(), expected_len);
            if let Some(first) = in_a {
                prop_assert_eq!(&messages[0], first);
            }
            if let Some(last) = in_b {
                prop_assert_eq!(messages.last().unwrap(), last);
            }
        }
    }

    #[test]
    fn merge_all_of_two_equals_merge(a in reminder_map(), b in reminder_map()) {
        prop_assert_eq!(merge_all(&[&a, &b]), merge(&a, &b));
    }

    #[test]
    fn merge_all_counts_every_message(sources in prop::collection::vec(reminder_map(), 0..5)) {
        let refs: Vec<&ReminderMap> = sources.iter().collect();
        let merged = merge_all(&refs);

        let total: usize = sources.iter().map(BTreeMap::len).sum();
        let merged_total: usize = merged.iter().map(|(_, m)| m.len()).sum();
        prop_assert_eq!(merged_total, total);
    }

    #[test]
    fn format_is_total(name in ".*") {
        let line = format(&name);
        prop_assert!(!line.is_empty());
        prop_assert!(line.starts_with(&name));
    }

    #[test]
    fn format_outside_vocabulary_uses_fallback(name in "[A-Z][a-z]{3,10} Flyby") {
        prop_assert_eq!(format(&name), std::format!("{} — {}", name, FALLBACK_DESCRIPTION));
    }

    #[test]
    fn enumerated_events_are_in_year_and_unique(
        phases in prop::collection::vec((phase(), instant()), 0..40),
        seasons in prop::collection::vec((season(), instant()), 0..8),
        oppositions in prop::collection::vec((planet(), instant()), 0..5),
        offset_minutes in -720i32..=840,
    ) {
        let mut eph = ScriptedEphemeris::new();
        for (p, t) in phases {
            eph = eph.with_phase(p, t);
        }
        for (s, t) in seasons {
            eph = eph.with_season(s, t);
        }
        for (p, t) in oppositions {
            eph = eph.with_opposition(p, t);
        }
        let offset = chrono::FixedOffset::east_opt(offset_minutes * 60).unwrap();
        let settings = EnumerationSettings::with_offset(offset);

        let events = enumerate_events(2025, &eph, &settings);

        let mut seen = HashSet::new();
        for event in &events {
            prop_assert_eq!(event.date.year(), 2025);
            prop_assert!(seen.insert((event.date, event.kind)));
        }

        let again = enumerate_events(2025, &eph, &settings);
        prop_assert_eq!(events.into_vec(), again.into_vec());
    }
}
