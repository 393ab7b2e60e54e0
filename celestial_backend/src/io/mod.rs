//! Reading reminder sources and writing reminder output.
//!
//! # Example
//!
//! ```no_run
//! use celestial_reminders::io::ReminderSourceLoader;
//! use std::path::Path;
//!
//! let personal = ReminderSourceLoader::load_from_file(Path::new("personal.csv"))
//!     .expect("Failed to load");
//! println!("Loaded {} reminders", personal.reminders.len());
//! ```

pub mod checksum;
pub mod loaders;


pub use checksum::calculate_checksum;
pub use loaders::{
    checksum_of, file_checksum, render_reminders_json, write_reminders_json, ReminderLoadResult,
    ReminderSourceLoader, ReminderSourceType,
};
