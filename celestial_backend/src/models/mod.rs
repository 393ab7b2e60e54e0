pub mod event;
pub mod reminders;
pub mod time;

pub use event::*;
pub use reminders::*;
pub use time::*;
