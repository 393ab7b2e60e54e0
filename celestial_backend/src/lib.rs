//! # Celestial Reminders
//!
//! Yearly calendar of celestial events turned into date-keyed reminder
//! messages.
//!
//! The crate computes lunar phases, equinoxes and solstices, planetary
//! oppositions and fixed-date meteor shower peaks for a given year, formats
//! them into one message per day, and merges the result with other
//! date-keyed sources such as a personal reminder sheet.
//!
//! ## Architecture
//!
//! - [`models`]: instants, the event vocabulary and reminder maps
//! - [`ephemeris`]: the astronomical oracle trait and its implementations
//! - [`services`]: enumeration, formatting, map building, merging and lookup
//! - [`parsing`]: CSV and JSON reminder sources
//! - [`io`]: source loading and JSON output
//! - [`config`]: TOML calendar configuration
//! - [`error`]: error types
//!
//! ## Example
//!
//! ```
//! use celestial_reminders::ephemeris::AnalyticEphemeris;
//! use celestial_reminders::services::{annual_event_map, EnumerationSettings, EventCatalog};
//!
//! let map = annual_event_map(
//!     2025,
//!     &AnalyticEphemeris::default(),
//!     &EnumerationSettings::default(),
//!     &EventCatalog::default(),
//! );
//! assert!(map.get("2025-08-12").unwrap().starts_with("Perseids Meteor Shower — "));
//! ```

pub mod config;
pub mod ephemeris;
pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod services;

pub use config::CalendarConfig;
pub use error::{ReminderError, ReminderResult};
