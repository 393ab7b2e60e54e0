use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::checksum::calculate_checksum;
use crate::error::{ReminderError, ReminderResult};
use crate::models::ReminderMap;
use crate::parsing::{csv_parser, json_parser};

/// Represents the source type of reminder data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderSourceType {
    Json,
    Csv,
}

impl ReminderSourceType {
    pub fn name(&self) -> &'static str {
        match self {
            ReminderSourceType::Json => "JSON",
            ReminderSourceType::Csv => "CSV",
        }
    }
}

/// Result of loading a reminder source
#[derive(Debug)]
pub struct ReminderLoadResult {
    pub reminders: ReminderMap,
    pub source_type: ReminderSourceType,
    pub num_reminders: usize,
}

impl ReminderLoadResult {
    pub fn new(reminders: ReminderMap, source_type: ReminderSourceType) -> Self {
        let num_reminders = reminders.len();
        Self {
            reminders,
            source_type,
            num_reminders,
        }
    }
}

/// Unified interface for loading date-keyed reminders from JSON or CSV
pub struct ReminderSourceLoader;

impl ReminderSourceLoader {
    /// Load reminders from a file (auto-detects JSON or CSV)
    pub fn load_from_file(path: &Path) -> Result<ReminderLoadResult> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .context("File has no extension")?;

        match extension.to_lowercase().as_str() {
            "json" => Self::load_from_json(path),
            "csv" => Self::load_from_csv(path),
            _ => anyhow::bail!("Unsupported file format: {}", extension),
        }
    }

    /// Load reminders from a JSON file
    pub fn load_from_json(json_path: &Path) -> Result<ReminderLoadResult> {
        let reminders =
            json_parser::parse_reminder_json(json_path).context("Failed to parse JSON file")?;
        Ok(ReminderLoadResult::new(reminders, ReminderSourceType::Json))
    }

    /// Load reminders from a JSON string
    pub fn load_from_json_str(json_str: &str) -> Result<ReminderLoadResult> {
        let reminders = json_parser::parse_reminder_json_str(json_str)
            .context("Failed to parse JSON string")?;
        Ok(ReminderLoadResult::new(reminders, ReminderSourceType::Json))
    }

    /// Load reminders from a CSV file
    pub fn load_from_csv(csv_path: &Path) -> Result<ReminderLoadResult> {
        let reminders =
            csv_parser::parse_reminder_csv(csv_path).context("Failed to parse CSV file")?;
        Ok(ReminderLoadResult::new(reminders, ReminderSourceType::Csv))
    }

    /// Load reminders from CSV text
    pub fn load_from_csv_str(csv_text: &str) -> Result<ReminderLoadResult> {
        let reminders =
            csv_parser::parse_reminder_csv_str(csv_text).context("Failed to parse CSV text")?;
        Ok(ReminderLoadResult::new(reminders, ReminderSourceType::Csv))
    }
}

/// Render a date-keyed map as JSON indented by two spaces.
pub fn render_reminders_json<T: Serialize>(value: &T) -> ReminderResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ReminderError::Internal(format!("Failed to serialize reminders: {}", e)))
}

/// Checksum of the JSON that [`write_reminders_json`] would write for `value`.
pub fn checksum_of<T: Serialize>(value: &T) -> ReminderResult<String> {
    Ok(calculate_checksum(&render_reminders_json(value)?))
}

/// Checksum of the file at `path`, or `None` if it does not exist.
pub fn file_checksum(path: &Path) -> ReminderResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(calculate_checksum(&content))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Write `value` as pretty JSON and return the checksum of what was written.
pub fn write_reminders_json<T: Serialize>(path: &Path, value: &T) -> ReminderResult<String> {
    let content = render_reminders_json(value)?;
    fs::write(path, &content)?;
    info!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(calculate_checksum(&content))
}
