//! Reminder generator binary
//!
//! Computes one year of celestial events, optionally merges them with a
//! personal reminder source, and writes the result as JSON.
//!
//! # Usage
//!
//! ```bash
//! REMINDERS_YEAR=2025 PERSONAL_REMINDERS=personal.csv \
//!   cargo run --bin generate-reminders
//! ```
//!
//! # Environment Variables
//!
//! - `CELESTIAL_CONFIG`: Path to a `celestial.toml` (default: search standard locations, else built-in defaults)
//! - `REMINDERS_YEAR`: Year to compute (default: config year, else the current local year)
//! - `PERSONAL_REMINDERS`: CSV or JSON file merged after the celestial events (optional)
//! - `REMINDERS_OUTPUT`: Output path (default: reminders.json)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Datelike, Utc};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use celestial_reminders::config::CalendarConfig;
use celestial_reminders::ephemeris::AnalyticEphemeris;
use celestial_reminders::io::{checksum_of, file_checksum, write_reminders_json, ReminderSourceLoader};
use celestial_reminders::services::{annual_event_map, merge, EventCatalog};

fn load_config() -> anyhow::Result<CalendarConfig> {
    if let Ok(path) = env::var("CELESTIAL_CONFIG") {
        return CalendarConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path));
    }

    match CalendarConfig::from_default_location() {
        Ok(config) => Ok(config),
        Err(e) => {
            info!("Using built-in configuration ({})", e);
            Ok(CalendarConfig::default())
        }
    }
}

fn target_year(config: &CalendarConfig) -> anyhow::Result<i32> {
    if let Ok(raw) = env::var("REMINDERS_YEAR") {
        return raw
            .trim()
            .parse()
            .with_context(|| format!("REMINDERS_YEAR is not a year: {:?}", raw));
    }

    if let Some(year) = config.calendar.year {
        return Ok(year);
    }

    let offset = config.utc_offset()?;
    Ok(Utc::now().with_timezone(&offset).year())
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let config = load_config()?;
    let year = target_year(&config)?;
    let settings = config.enumeration_settings()?;
    let catalog = EventCatalog::with_overrides(&config.catalog);

    info!("Generating celestial reminders for {}", year);
    let celestial = annual_event_map(year, &AnalyticEphemeris::default(), &settings, &catalog);

    let personal = match env::var("PERSONAL_REMINDERS") {
        Ok(path) => {
            let loaded = ReminderSourceLoader::load_from_file(Path::new(&path))
                .with_context(|| format!("Failed to load personal reminders from {}", path))?;
            info!(
                "Loaded {} personal reminders from {} ({})",
                loaded.num_reminders,
                path,
                loaded.source_type.name()
            );
            loaded.reminders
        }
        Err(_) => {
            warn!("PERSONAL_REMINDERS not set; writing celestial events only");
            Default::default()
        }
    };

    let merged = merge(celestial.as_ref(), &personal);

    let output = env::var("REMINDERS_OUTPUT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("reminders.json"));

    let checksum = checksum_of(&merged)?;
    if file_checksum(&output)?.as_deref() == Some(checksum.as_str()) {
        info!("{} is up to date ({} dates)", output.display(), merged.len());
        return Ok(());
    }

    write_reminders_json(&output, &merged)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(
        "{} updated: {} dates, checksum {}",
        output.display(),
        merged.len(),
        &checksum[..12]
    );

    Ok(())
}
