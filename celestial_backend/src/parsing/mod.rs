//! Parsers for date-keyed reminder sources.
//!
//! - [`csv_parser`]: two-column `date,message` exports (e.g. a spreadsheet)
//! - [`json_parser`]: `{date: message}` or merged `{date: [messages]}` objects
//!
//! Both produce a [`ReminderMap`](crate::models::ReminderMap) keyed by
//! normalised `YYYY-MM-DD` dates.
//!
//! # Example
//!
//! ```no_run
//! use celestial_reminders::parsing::csv_parser::parse_reminder_csv;
//! use std::path::Path;
//!
//! let reminders = parse_reminder_csv(Path::new("personal.csv"))
//!     .expect("Failed to parse reminders");
//! ```

pub mod csv_parser;
pub mod json_parser;

#[cfg(test)]
mod csv_parser_tests;

pub use csv_parser::{parse_reminder_csv, parse_reminder_csv_str};
pub use json_parser::{parse_reminder_json, parse_reminder_json_str};
