//! # bc-core
//!
//! Core types and error definitions for the bankcutoff workspace.
//!
//! This crate provides the pieces shared by every other crate: the error
//! enum, the `ensure!` / `fail!` macros, the minute-of-day alias, and the
//! strict string parsers used for dates and clock times.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Input parsing helpers.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Minutes elapsed since local midnight (0–1439 for a valid time of day).
pub type Minutes = u16;

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: Minutes = 24 * 60;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
