//! The outcome of a cutoff check.

use bc_time::{Date, TimeOfDay};
use serde::Serialize;

/// Why a payment processes on the date it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// Business day and submitted before the cutoff.
    BeforeCutoff,
    /// Business day but submitted at or after the cutoff.
    AfterCutoff,
    /// Submitted on a Saturday or Sunday.
    Weekend,
    /// Submitted on an observed federal holiday.
    Holiday,
}

/// Processing decision for one submission.  Built fresh per query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Date the payment is expected to process; always a business day.
    pub processes_on: Date,
    /// `true` when `processes_on` is the submission date.
    pub is_today: bool,
    /// Machine-readable reason.
    pub reason: ReasonCode,
    /// Human-readable explanation.
    pub detail: String,
    /// Cutoff that was applied (ET).
    pub cutoff: TimeOfDay,
    /// Submission time that was checked (ET).
    pub submitted: TimeOfDay,
    /// Submission date that was checked (ET).
    pub submitted_on: Date,
}

impl Decision {
    /// One-line verdict.
    pub fn headline(&self) -> &'static str {
        if self.is_today {
            "Likely processes today"
        } else {
            "Likely next business day"
        }
    }
}
