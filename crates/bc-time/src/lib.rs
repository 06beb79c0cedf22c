//! # bc-time
//!
//! Date, clock-time, holiday, and business-day-calendar types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and the weekends-only calendar.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// US federal holiday rules and per-year holiday sets.
pub mod holidays;

/// `Month`: month of the year.
pub mod month;

/// `TimeOfDay`: minutes since midnight.
pub mod time_of_day;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, DayStatus, WeekendsOnly};
pub use calendars::UnitedStatesFederal;
pub use date::Date;
pub use holidays::{observed_holidays, FederalHoliday, HolidayRule, HolidaySet};
pub use month::Month;
pub use time_of_day::TimeOfDay;
pub use weekday::Weekday;
