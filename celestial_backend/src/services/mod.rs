//! Reminder pipeline services.
//!
//! Enumeration turns a year and an ephemeris into an event set, the formatter
//! and mapping builder turn that set into an [`AnnualEventMap`], and the merger
//! combines it with other date-keyed sources.
//!
//! [`AnnualEventMap`]: crate::models::AnnualEventMap

pub mod enumerator;
pub mod formatter;
pub mod lookup;
pub mod mapping;
pub mod merge;

pub use enumerator::{enumerate_events, EnumerationSettings, EventCategory, MeteorShowerPeak};
pub use formatter::{format, EventCatalog, FALLBACK_DESCRIPTION};
pub use lookup::{reminders_for, reminders_for_today};
pub use mapping::{annual_event_map, build_annual_map};
pub use merge::{merge, merge_all};
