//! Daily reminder lookup.

use chrono::{FixedOffset, NaiveDate, Utc};

use crate::models::{iso_date, MergedReminderMap};

/// Messages scheduled for `date`, empty when there are none.
pub fn reminders_for(map: &MergedReminderMap, date: NaiveDate) -> Vec<String> {
    map.get(&iso_date(date))
        .map(|messages| messages.to_vec())
        .unwrap_or_default()
}

/// Messages for the current calendar day at `offset`.
pub fn reminders_for_today(map: &MergedReminderMap, offset: FixedOffset) -> Vec<String> {
    let today = Utc::now().with_timezone(&offset).date_naive();
    reminders_for(map, today)
}
