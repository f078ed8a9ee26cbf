//! Beijing time formatting, plus a small HTTP service exposing it.
//!
//! ```no_run
//! let now = beijing_time::get_current_time()?;
//! let at = beijing_time::format_schedule_time(1_710_484_205_000i64)?;
//! assert_eq!(at, "14:30");
//! # let _ = now;
//! # Ok::<(), beijing_time::TimeError>(())
//! ```

pub mod application;
pub mod config;
pub mod controller;
pub mod service;
pub mod utils;

pub use utils::time::{
    FIXED_TIME_ZONE, IntoInstant, TimeError, current_instant, fixed_time_zone, format_date_label,
    format_full_time, format_hour_label, format_schedule_time, get_current_time,
};
