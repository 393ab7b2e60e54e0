use log::warn;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ReminderError, ReminderResult};
use crate::models::{iso_date, parse_date_key, ReminderMap};
use crate::services::formatter::DAY_MESSAGE_SEPARATOR;

/// A reminder value: one message, or a merged list of messages
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ReminderValue {
    Single(String),
    Many(Vec<String>),
}

impl ReminderValue {
    fn into_message(self) -> String {
        match self {
            ReminderValue::Single(message) => message.trim().to_string(),
            ReminderValue::Many(messages) => messages
                .iter()
                .map(|m| m.trim())
                .filter(|m| !m.is_empty())
                .collect::<Vec<_>>()
                .join(DAY_MESSAGE_SEPARATOR),
        }
    }
}

/// Parse a reminder JSON file.
///
/// See [`parse_reminder_json_str`] for the accepted shapes.
pub fn parse_reminder_json(json_path: &Path) -> ReminderResult<ReminderMap> {
    let content = std::fs::read_to_string(json_path)?;
    parse_reminder_json_str(&content).map_err(|e| match e {
        ReminderError::Parse(msg) => {
            ReminderError::Parse(format!("{}: {}", json_path.display(), msg))
        }
        other => other,
    })
}

/// Parse reminder JSON text.
///
/// Accepts `{"YYYY-MM-DD": "message"}` or a previously merged
/// `{"YYYY-MM-DD": ["message", ...]}`; list entries are joined with a blank
/// line. Entries whose message ends up empty are dropped, and keys that are
/// not `YYYY-MM-DD` dates are skipped with a warning.
pub fn parse_reminder_json_str(json_str: &str) -> ReminderResult<ReminderMap> {
    let deserializer = &mut serde_json::Deserializer::from_str(json_str);
    let raw: BTreeMap<String, ReminderValue> = serde_path_to_error::deserialize(deserializer)
        .map_err(|e| {
            let path = e.path().to_string();
            ReminderError::Parse(format!("at '{}': {}", path, e.into_inner()))
        })?;

    let mut reminders = ReminderMap::new();
    for (date, value) in raw {
        let key = match parse_date_key(&date) {
            Ok(parsed) => iso_date(parsed),
            Err(e) => {
                warn!("Skipping JSON entry {:?}: {}", date, e);
                continue;
            }
        };
        let message = value.into_message();
        if message.is_empty() {
            continue;
        }
        reminders.insert(key, message);
    }

    Ok(reminders)
}
