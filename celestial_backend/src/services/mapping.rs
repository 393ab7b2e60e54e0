//! Annual event map assembly.

use std::collections::BTreeMap;

use log::info;

use super::enumerator::{enumerate_events, EnumerationSettings};
use super::formatter::EventCatalog;
use crate::ephemeris::Ephemeris;
use crate::models::{AnnualEventMap, EventSet};

/// Group events by date and render one message per date.
///
/// Same-day events keep the order they appear in `events`; dates come out in
/// ascending order because ISO date keys sort chronologically.
pub fn build_annual_map(events: &EventSet, catalog: &EventCatalog) -> AnnualEventMap {
    let mut by_date: BTreeMap<String, Vec<&'static str>> = BTreeMap::new();
    for event in events {
        by_date.entry(event.iso_date()).or_default().push(event.name());
    }

    let map = by_date
        .into_iter()
        .map(|(date, names)| (date, catalog.day_message(names)))
        .collect();

    AnnualEventMap::from_map(map)
}

/// Enumerate `year` and build its annual map in one step.
pub fn annual_event_map<E: Ephemeris + ?Sized>(
    year: i32,
    ephemeris: &E,
    settings: &EnumerationSettings,
    catalog: &EventCatalog,
) -> AnnualEventMap {
    let events = enumerate_events(year, ephemeris, settings);
    let map = build_annual_map(&events, catalog);
    info!(
        "Built annual map for {}: {} events on {} dates",
        year,
        events.len(),
        map.len()
    );
    map
}
