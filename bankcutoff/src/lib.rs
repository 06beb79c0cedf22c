//! # bankcutoff
//!
//! Decide whether a bank transfer submitted at a given Eastern-Time date and
//! time will process the same day or roll to the next business day.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this crate
//! rather than the individual `bc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use bankcutoff::{CutoffEngine, CutoffTable};
//!
//! let engine = CutoffEngine::new(CutoffTable::builtin());
//! // Saturday, July 5, 2025: rolls to Monday the 7th.
//! let d = engine.decide_str("chase", "wire", "2025-07-05", "10:00").unwrap();
//! assert!(!d.is_today);
//! assert_eq!(d.processes_on.to_string(), "2025-07-07");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and input parsers.
pub use bc_core as core;

/// Dates, clock times, holidays, and business-day calendars.
pub use bc_time as time;

/// Cutoff table and decision engine.
pub use bc_cutoff as cutoff;

pub use bc_core::{Error, Result};
pub use bc_cutoff::{CutoffEngine, CutoffTable, Decision, Rail, ReasonCode};
pub use bc_time::{Calendar, Date, TimeOfDay, UnitedStatesFederal};
