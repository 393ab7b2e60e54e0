use anyhow::{Context, Result};
use log::{debug, warn};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;

use crate::models::{iso_date, parse_date_key, ReminderMap};

const DATE_COLUMN: &str = "date";
const MESSAGE_COLUMN: &str = "message";

/// Parse a reminder CSV file into a Polars DataFrame of string columns
pub fn read_reminder_csv(csv_path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()
        .with_context(|| format!("Failed to parse CSV {}", csv_path.display()))
}

/// Parse reminder CSV text into a Polars DataFrame of string columns
pub fn read_reminder_csv_str(csv_text: &str) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(csv_text.as_bytes().to_vec()))
        .finish()
        .context("Failed to parse CSV text into DataFrame")
}

/// Parse a reminder CSV file into a date → message mapping
pub fn parse_reminder_csv(csv_path: &Path) -> Result<ReminderMap> {
    let df = read_reminder_csv(csv_path)?;
    dataframe_to_reminders(&df)
}

/// Parse reminder CSV text into a date → message mapping
pub fn parse_reminder_csv_str(csv_text: &str) -> Result<ReminderMap> {
    let df = read_reminder_csv_str(csv_text)?;
    dataframe_to_reminders(&df)
}

/// Find a column by name, ignoring case and surrounding spaces in the header
fn find_column<'a>(df: &'a DataFrame, wanted: &str) -> Result<&'a StringChunked> {
    let name = df
        .get_column_names()
        .into_iter()
        .find(|name| name.trim().eq_ignore_ascii_case(wanted))
        .map(|name| name.to_string())
        .with_context(|| {
            format!(
                "CSV must have a '{}' column. Found columns: {:?}",
                wanted,
                df.get_column_names()
            )
        })?;

    Ok(df.column(&name)?.str()?)
}

/// Convert a two-column DataFrame into a date → message mapping.
///
/// Values are trimmed. Rows with an empty date or message are dropped, as are
/// rows whose date is not `YYYY-MM-DD`. A repeated date keeps the last row.
pub fn dataframe_to_reminders(df: &DataFrame) -> Result<ReminderMap> {
    let dates = find_column(df, DATE_COLUMN)?;
    let messages = find_column(df, MESSAGE_COLUMN)?;

    let mut reminders = ReminderMap::new();

    for (row, (date, message)) in dates.into_iter().zip(messages.into_iter()).enumerate() {
        let date = date.map(str::trim).unwrap_or_default();
        let message = message.map(str::trim).unwrap_or_default();

        if date.is_empty() || message.is_empty() {
            debug!("Skipping CSV row {} with empty date or message", row + 1);
            continue;
        }

        let parsed = match parse_date_key(date) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Skipping CSV row {}: {}", row + 1, e);
                continue;
            }
        };

        if let Some(previous) = reminders.insert(iso_date(parsed), message.to_string()) {
            debug!("CSV row {} replaces earlier reminder {:?}", row + 1, previous);
        }
    }

    Ok(reminders)
}
