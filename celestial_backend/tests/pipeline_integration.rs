//! End-to-end tests for the reminder pipeline.
//!
//! Enumeration through map building and merging, using both the scripted and
//! the analytic ephemeris.

use std::io::Write;

use chrono::{FixedOffset, TimeZone, Utc};
use tempfile::{Builder, TempDir};

use celestial_reminders::ephemeris::{AnalyticEphemeris, ScriptedEphemeris};
use celestial_reminders::io::{write_reminders_json, ReminderSourceLoader};
use celestial_reminders::models::{ModifiedJulianDate, MoonPhase, Planet, ReminderMap};
use celestial_reminders::services::{
    annual_event_map, build_annual_map, enumerate_events, format, merge, reminders_for,
    EnumerationSettings, EventCatalog,
};

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> ModifiedJulianDate {
    ModifiedJulianDate::from_datetime(Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap())
}

// =========================================================
// Concrete scenarios
// =========================================================

#[test]
fn test_january_full_and_new_moon_messages() {
    let eph = ScriptedEphemeris::new()
        .with_phase(MoonPhase::Full, utc(2025, 1, 13, 12, 0))
        .with_phase(MoonPhase::New, utc(2025, 1, 29, 6, 0));

    let map = annual_event_map(
        2025,
        &eph,
        &EnumerationSettings::default(),
        &EventCatalog::default(),
    );

    assert_eq!(
        map.get("2025-01-13"),
        Some("Full Moon — The moon is at peak illumination — a time for release, reflection, and culmination.")
    );
    assert!(map.get("2025-01-29").unwrap().starts_with("New Moon — "));

    let january: Vec<&str> = map.dates().filter(|d| d.starts_with("2025-01")).collect();
    // Quadrantids on Jan 3 plus the two phases
    assert_eq!(january, vec!["2025-01-03", "2025-01-13", "2025-01-29"]);
}

#[test]
fn test_merge_example() {
    let mut celestial = ReminderMap::new();
    celestial.insert("2025-03-20".to_string(), "Equinox note".to_string());
    let mut personal = ReminderMap::new();
    personal.insert("2025-03-20".to_string(), "Personal note".to_string());
    personal.insert("2025-04-01".to_string(), "Birthday".to_string());

    let merged = merge(&celestial, &personal);

    let json = serde_json::to_value(&merged).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "2025-03-20": ["Equinox note", "Personal note"],
            "2025-04-01": ["Birthday"]
        })
    );
}

#[test]
fn test_unknown_event_fallback() {
    assert_eq!(
        format("Comet Flyby"),
        "Comet Flyby — A notable celestial event worth marking."
    );
}

// =========================================================
// Timezone projection
// =========================================================

#[test]
fn test_late_utc_phase_lands_on_next_local_day() {
    // 22:27 UTC on Jan 13 is 03:57 on Jan 14 at +05:30
    let eph = ScriptedEphemeris::new().with_phase(MoonPhase::Full, utc(2025, 1, 13, 22, 27));

    let ist = build_annual_map(
        &enumerate_events(2025, &eph, &EnumerationSettings::default()),
        &EventCatalog::default(),
    );
    assert!(ist.get("2025-01-13").is_none());
    assert!(ist.get("2025-01-14").unwrap().starts_with("Full Moon"));

    let west = EnumerationSettings::with_offset(FixedOffset::west_opt(8 * 3600).unwrap());
    let pacific = build_annual_map(&enumerate_events(2025, &eph, &west), &EventCatalog::default());
    assert!(pacific.get("2025-01-13").unwrap().starts_with("Full Moon"));
}

#[test]
fn test_same_day_events_share_one_message() {
    let eph = ScriptedEphemeris::new()
        .with_phase(MoonPhase::Full, utc(2025, 12, 14, 3, 0))
        .with_opposition(Planet::Jupiter, utc(2025, 12, 14, 14, 0));
    let mut settings = EnumerationSettings::with_offset(FixedOffset::east_opt(0).unwrap());
    settings.opposition_step = qtty::Days::new(1.0);
    settings.opposition_tolerance = qtty::Radians::new(0.004);

    let map = annual_event_map(2025, &eph, &settings, &EventCatalog::default());

    let message = map.get("2025-12-14").unwrap();
    let lines: Vec<&str> = message.split("\n\n").collect();
    assert_eq!(lines.len(), 3, "{}", message);
    assert!(lines[0].starts_with("Full Moon — "));
    assert!(lines[1].starts_with("Jupiter Opposition — "));
    assert!(lines[2].starts_with("Geminids Meteor Shower — "));
}

// =========================================================
// Analytic ephemeris
// =========================================================

#[test]
fn test_analytic_map_is_sorted_non_empty_and_in_year() {
    let map = annual_event_map(
        2025,
        &AnalyticEphemeris::default(),
        &EnumerationSettings::default(),
        &EventCatalog::default(),
    );

    let dates: Vec<&str> = map.dates().collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
    assert!(dates.iter().all(|d| d.starts_with("2025-")));
    assert!(map.iter().all(|(_, message)| !message.is_empty()));
    // ~50 phases, 4 seasons and 6 showers, some sharing a day
    assert!(map.len() > 45 && map.len() < 70, "{} dates", map.len());
}

#[test]
fn test_analytic_map_is_repeatable() {
    let eph = AnalyticEphemeris::default();
    let settings = EnumerationSettings::default();
    let catalog = EventCatalog::default();

    let first = annual_event_map(2024, &eph, &settings, &catalog);
    let second = annual_event_map(2024, &eph, &settings, &catalog);

    assert_eq!(first, second);
}

// =========================================================
// Sources and output
// =========================================================

#[test]
fn test_personal_csv_merged_after_celestial() {
    let mut csv = Builder::new().suffix(".csv").tempfile().unwrap();
    write!(
        csv,
        "date,message\n2025-01-13,Dinner with Priya\n2025-02-14,Valentine's\n,dropped\n"
    )
    .unwrap();

    let eph = ScriptedEphemeris::new().with_phase(MoonPhase::Full, utc(2025, 1, 13, 12, 0));
    let celestial = annual_event_map(
        2025,
        &eph,
        &EnumerationSettings::default(),
        &EventCatalog::default(),
    );
    let personal = ReminderSourceLoader::load_from_file(csv.path()).unwrap();

    let merged = merge(celestial.as_ref(), &personal.reminders);

    let on_full_moon = merged.get("2025-01-13").unwrap();
    assert_eq!(on_full_moon.len(), 2);
    assert!(on_full_moon[0].starts_with("Full Moon — "));
    assert_eq!(on_full_moon[1], "Dinner with Priya");
    assert_eq!(merged.get("2025-02-14").unwrap(), ["Valentine's".to_string()]);
    assert_eq!(merged.len(), celestial.len() + 1);

    let date = chrono::NaiveDate::from_ymd_opt(2025, 1, 13).unwrap();
    assert_eq!(reminders_for(&merged, date).len(), 2);
}

#[test]
fn test_written_output_is_plain_date_keyed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reminders.json");
    let map = annual_event_map(
        2025,
        &ScriptedEphemeris::new(),
        &EnumerationSettings::default(),
        &EventCatalog::default(),
    );

    write_reminders_json(&path, &map).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 6);
    assert!(object["2025-08-12"]
        .as_str()
        .unwrap()
        .starts_with("Perseids Meteor Shower — "));
}
