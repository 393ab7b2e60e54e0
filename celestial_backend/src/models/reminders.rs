//! Date-keyed reminder mappings.
//!
//! Keys are ISO `YYYY-MM-DD` strings, so the `BTreeMap` ordering is also
//! chronological ordering.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ReminderError, ReminderResult};

/// A single-source mapping from ISO date to one message.
pub type ReminderMap = BTreeMap<String, String>;

/// Parse a `YYYY-MM-DD` reminder key.
pub fn parse_date_key(key: &str) -> ReminderResult<NaiveDate> {
    NaiveDate::parse_from_str(key.trim(), "%Y-%m-%d").map_err(|e| {
        ReminderError::Validation(format!("Invalid reminder date {:?}: {}", key, e))
    })
}

/// One year of celestial events, one message per date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnualEventMap(ReminderMap);

impl AnnualEventMap {
    pub(crate) fn from_map(map: ReminderMap) -> Self {
        Self(map)
    }

    pub fn get(&self, date: &str) -> Option<&str> {
        self.0.get(date).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> ReminderMap {
        self.0
    }
}

impl AsRef<ReminderMap> for AnnualEventMap {
    fn as_ref(&self) -> &ReminderMap {
        &self.0
    }
}

/// Reminders from several sources, messages listed in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergedReminderMap(BTreeMap<String, Vec<String>>);

impl MergedReminderMap {
    pub(crate) fn from_map(map: BTreeMap<String, Vec<String>>) -> Self {
        Self(map)
    }

    pub fn get(&self, date: &str) -> Option<&[String]> {
        self.0.get(date).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annual_map_serializes_as_plain_object() {
        let mut map = ReminderMap::new();
        map.insert("2025-01-13".to_string(), "Full Moon".to_string());
        let annual = AnnualEventMap::from_map(map);

        let json = serde_json::to_string(&annual).unwrap();
        assert_eq!(json, r#"{"2025-01-13":"Full Moon"}"#);
    }

    #[test]
    fn test_merged_map_serializes_lists() {
        let mut map = BTreeMap::new();
        map.insert(
            "2025-03-20".to_string(),
            vec!["Equinox note".to_string(), "Personal note".to_string()],
        );
        let merged = MergedReminderMap::from_map(map);

        let json = serde_json::to_string(&merged).unwrap();
        assert_eq!(json, r#"{"2025-03-20":["Equinox note","Personal note"]}"#);
        assert_eq!(merged.get("2025-03-20").map(|m| m.len()), Some(2));
    }

    #[test]
    fn test_parse_date_key() {
        assert_eq!(
            parse_date_key(" 2025-03-20 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()
        );
        assert!(matches!(
            parse_date_key("20/03/2025"),
            Err(ReminderError::Validation(_))
        ));
        assert!(parse_date_key("2025-02-30").is_err());
    }

    #[test]
    fn test_dates_iterate_in_chronological_order() {
        let mut map = ReminderMap::new();
        map.insert("2025-12-01".to_string(), "b".to_string());
        map.insert("2025-02-01".to_string(), "a".to_string());
        let annual = AnnualEventMap::from_map(map);
        let dates: Vec<&str> = annual.dates().collect();
        assert_eq!(dates, vec!["2025-02-01", "2025-12-01"]);
    }
}
