//! # bc-cutoff
//!
//! Bank transfer cutoffs and the same-day processing decision.
//!
//! ```rust
//! use bc_cutoff::{CutoffEngine, CutoffTable, ReasonCode};
//!
//! let engine = CutoffEngine::new(CutoffTable::builtin());
//! // Tuesday, July 1, 2025 at 15:00 ET; Chase standard ACH closes at 16:00.
//! let d = engine.decide_str("chase", "ach_standard", "2025-07-01", "15:00").unwrap();
//! assert!(d.is_today);
//! assert_eq!(d.reason, ReasonCode::BeforeCutoff);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Decision record and reason codes.
pub mod decision;

/// The decision engine.
pub mod engine;

/// Transfer rails.
pub mod rail;

/// Bank / rail cutoff table.
pub mod table;

pub use decision::{Decision, ReasonCode};
pub use engine::CutoffEngine;
pub use rail::{Rail, UnknownRail};
pub use table::{Bank, BankRailCutoff, CutoffTable};
