//! Merging independently sourced reminder maps.

use std::collections::BTreeMap;

use crate::models::{MergedReminderMap, ReminderMap};

/// Merge any number of sources into date → messages.
///
/// Each date present in at least one source gets one message per source that
/// has a non-empty entry for it, listed in source order. Inputs are left
/// untouched.
pub fn merge_all(sources: &[&ReminderMap]) -> MergedReminderMap {
    let mut merged: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for source in sources {
        for (date, message) in source.iter() {
            if message.is_empty() {
                continue;
            }
            merged.entry(date.clone()).or_default().push(message.clone());
        }
    }

    MergedReminderMap::from_map(merged)
}

/// Merge two sources; on a shared date the message from `a` comes first.
///
/// # Example
/// ```
/// use celestial_reminders::models::ReminderMap;
/// use celestial_reminders::services::merge;
///
/// let mut celestial = ReminderMap::new();
/// celestial.insert("2025-03-20".into(), "Equinox note".into());
/// let mut personal = ReminderMap::new();
/// personal.insert("2025-03-20".into(), "Personal note".into());
/// personal.insert("2025-04-01".into(), "Birthday".into());
///
/// let merged = merge(&celestial, &personal);
/// assert_eq!(merged.get("2025-03-20").unwrap(), ["Equinox note", "Personal note"]);
/// assert_eq!(merged.get("2025-04-01").unwrap(), ["Birthday"]);
/// ```
pub fn merge(a: &ReminderMap, b: &ReminderMap) -> MergedReminderMap {
    merge_all(&[a, b])
}
