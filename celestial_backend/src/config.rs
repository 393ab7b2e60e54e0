//! Calendar configuration file support.
//!
//! This module reads the reminder calendar settings from a TOML file. Every
//! section is optional; an empty file yields the defaults.
//!
//! ```toml
//! [calendar]
//! utc_offset = "+05:30"
//! year = 2025
//!
//! [oppositions]
//! tolerance_rad = 0.05
//! step_days = 10.0
//! planets = ["Mars", "Jupiter", "Saturn", "Uranus"]
//!
//! [[meteor_showers]]
//! name = "Perseids"
//! month = 8
//! day = 13
//!
//! [catalog]
//! "Full Moon" = "Bright night, brighter plans."
//! ```

use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ReminderError, ReminderResult};
use crate::models::{parse_utc_offset, MeteorShower, Planet};
use crate::services::enumerator::{EnumerationSettings, MeteorShowerPeak};

/// Calendar configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub calendar: CalendarSettings,
    #[serde(default)]
    pub moon: MoonSettings,
    #[serde(default)]
    pub oppositions: OppositionSettings,
    #[serde(default = "default_meteor_showers")]
    pub meteor_showers: Vec<MeteorShowerSettings>,
    /// Extra or replacement event descriptions keyed by event name.
    #[serde(default)]
    pub catalog: BTreeMap<String, String>,
}

/// Target year and local timezone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarSettings {
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    #[serde(default)]
    pub year: Option<i32>,
}

/// Lunar phase scan settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoonSettings {
    #[serde(default = "default_cursor_epsilon_days")]
    pub cursor_epsilon_days: f64,
}

/// Opposition scan settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OppositionSettings {
    #[serde(default = "default_tolerance_rad")]
    pub tolerance_rad: f64,
    #[serde(default = "default_step_days")]
    pub step_days: f64,
    #[serde(default = "default_planets")]
    pub planets: Vec<String>,
}

/// One meteor shower and its calendar-fixed peak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeteorShowerSettings {
    pub name: String,
    pub month: u32,
    pub day: u32,
}

fn default_utc_offset() -> String {
    "+05:30".to_string()
}

fn default_cursor_epsilon_days() -> f64 {
    1.0
}

fn default_tolerance_rad() -> f64 {
    0.05
}

fn default_step_days() -> f64 {
    10.0
}

fn default_planets() -> Vec<String> {
    Planet::DEFAULT_TRACKED
        .iter()
        .map(|p| p.name().to_string())
        .collect()
}

fn default_meteor_showers() -> Vec<MeteorShowerSettings> {
    MeteorShower::ALL
        .iter()
        .map(|shower| {
            let (month, day) = shower.default_peak();
            MeteorShowerSettings {
                name: shower.name().to_string(),
                month,
                day,
            }
        })
        .collect()
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            utc_offset: default_utc_offset(),
            year: None,
        }
    }
}

impl Default for MoonSettings {
    fn default() -> Self {
        Self {
            cursor_epsilon_days: default_cursor_epsilon_days(),
        }
    }
}

impl Default for OppositionSettings {
    fn default() -> Self {
        Self {
            tolerance_rad: default_tolerance_rad(),
            step_days: default_step_days(),
            planets: default_planets(),
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            calendar: CalendarSettings::default(),
            moon: MoonSettings::default(),
            oppositions: OppositionSettings::default(),
            meteor_showers: default_meteor_showers(),
            catalog: BTreeMap::new(),
        }
    }
}

impl CalendarConfig {
    /// Load calendar configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(CalendarConfig)` if the file parses and validates
    /// * `Err(ReminderError)` if file cannot be read, parsed or validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> ReminderResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ReminderError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> ReminderResult<Self> {
        let config: CalendarConfig = toml::from_str(content).map_err(|e| {
            ReminderError::Configuration(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load calendar configuration from the default location.
    ///
    /// Searches for `celestial.toml` in:
    /// 1. Current directory
    /// 2. `celestial_backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> ReminderResult<Self> {
        let search_paths = vec![
            PathBuf::from("celestial.toml"),
            PathBuf::from("celestial_backend/celestial.toml"),
            PathBuf::from("../celestial.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ReminderError::Configuration(
            "No celestial.toml found in standard locations".to_string(),
        ))
    }

    /// Check every setting, reporting the first problem found.
    pub fn validate(&self) -> ReminderResult<()> {
        self.utc_offset()?;
        self.tracked_planets()?;
        self.meteor_shower_peaks()?;

        let opp = &self.oppositions;
        if !(opp.step_days.is_finite() && opp.step_days > 0.0) {
            return Err(ReminderError::Configuration(format!(
                "oppositions.step_days must be positive, got {}",
                opp.step_days
            )));
        }
        if !(opp.tolerance_rad.is_finite() && opp.tolerance_rad > 0.0 && opp.tolerance_rad < PI) {
            return Err(ReminderError::Configuration(format!(
                "oppositions.tolerance_rad must be in (0, π), got {}",
                opp.tolerance_rad
            )));
        }

        let eps = self.moon.cursor_epsilon_days;
        if !(eps.is_finite() && eps > 0.0) {
            return Err(ReminderError::Configuration(format!(
                "moon.cursor_epsilon_days must be positive, got {}",
                eps
            )));
        }

        if let Some(empty) = self.catalog.iter().find(|(_, text)| text.trim().is_empty()) {
            return Err(ReminderError::Configuration(format!(
                "catalog entry for {:?} has an empty description",
                empty.0
            )));
        }

        Ok(())
    }

    /// Local timezone used to turn event instants into dates.
    pub fn utc_offset(&self) -> ReminderResult<FixedOffset> {
        parse_utc_offset(&self.calendar.utc_offset).map_err(ReminderError::Configuration)
    }

    pub fn tracked_planets(&self) -> ReminderResult<Vec<Planet>> {
        self.oppositions
            .planets
            .iter()
            .map(|name| {
                Planet::from_name(name).ok_or_else(|| {
                    ReminderError::Configuration(format!("Unknown planet in oppositions: {}", name))
                })
            })
            .collect()
    }

    pub fn meteor_shower_peaks(&self) -> ReminderResult<Vec<MeteorShowerPeak>> {
        self.meteor_showers
            .iter()
            .map(|entry| {
                let shower = MeteorShower::from_name(&entry.name).ok_or_else(|| {
                    ReminderError::Configuration(format!("Unknown meteor shower: {}", entry.name))
                })?;
                // 2024 is a leap year, so Feb 29 passes here and is skipped in other years
                if NaiveDate::from_ymd_opt(2024, entry.month, entry.day).is_none() {
                    return Err(ReminderError::Configuration(format!(
                        "Invalid peak date {}-{} for {}",
                        entry.month, entry.day, entry.name
                    )));
                }
                Ok(MeteorShowerPeak {
                    shower,
                    month: entry.month,
                    day: entry.day,
                })
            })
            .collect()
    }

    /// Runtime settings for the event enumerator.
    pub fn enumeration_settings(&self) -> ReminderResult<EnumerationSettings> {
        Ok(EnumerationSettings {
            utc_offset: self.utc_offset()?,
            cursor_epsilon: qtty::Days::new(self.moon.cursor_epsilon_days),
            opposition_tolerance: qtty::Radians::new(self.oppositions.tolerance_rad),
            opposition_step: qtty::Days::new(self.oppositions.step_days),
            planets: self.tracked_planets()?,
            meteor_showers: self.meteor_shower_peaks()?,
        })
    }
}
