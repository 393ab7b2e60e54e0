use celestial_reminders::ephemeris::{AnalyticEphemeris, Ephemeris};
use celestial_reminders::models::{ModifiedJulianDate, ReminderMap};
use celestial_reminders::services::{
    annual_event_map, enumerate_events, merge, EnumerationSettings, EventCatalog, EventCategory,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn bench_full_year(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumeration");
    let eph = AnalyticEphemeris::default();
    let settings = EnumerationSettings::default();

    for year in [2025, 2030] {
        group.bench_with_input(BenchmarkId::new("full_year", year), &year, |b, &year| {
            b.iter(|| enumerate_events(black_box(year), &eph, &settings));
        });
    }

    for category in EventCategory::ALL {
        group.bench_function(category.name(), |b| {
            b.iter(|| category.detect(&eph, black_box(2025), &settings));
        });
    }

    group.finish();
}

fn bench_ephemeris_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("ephemeris");
    let eph = AnalyticEphemeris::default();
    let start = ModifiedJulianDate::new(60676.0);

    group.bench_function("next_full_moon", |b| {
        b.iter(|| eph.next_full_moon(black_box(start)));
    });

    group.bench_function("moon_longitude_x1000", |b| {
        b.iter(|| {
            for i in 0..1000 {
                let t = ModifiedJulianDate::new(60676.0 + i as f64 * 0.01);
                black_box(eph.moon_longitude(black_box(t)));
            }
        });
    });

    group.finish();
}

fn bench_map_and_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapping");
    let eph = AnalyticEphemeris::default();
    let settings = EnumerationSettings::default();
    let catalog = EventCatalog::default();
    let annual = annual_event_map(2025, &eph, &settings, &catalog);

    let personal: ReminderMap = (1..=28)
        .map(|day| (format!("2025-06-{:02}", day), format!("Personal note {}", day)))
        .collect();

    group.bench_function("merge", |b| {
        b.iter(|| merge(black_box(annual.as_ref()), black_box(&personal)));
    });

    group.finish();
}

criterion_group!(benches, bench_full_year, bench_ephemeris_queries, bench_map_and_merge);
criterion_main!(benches);
