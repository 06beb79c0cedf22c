//! `CutoffEngine`: decides whether a submission processes today.
//!
//! The engine combines a [`CutoffTable`] with a business-day [`Calendar`].
//! All dates and times are taken to be Eastern Time already; no timezone
//! conversion happens here.

use bc_core::errors::{Error, Result};
use bc_time::{Calendar, Date, DayStatus, TimeOfDay, UnitedStatesFederal};

use crate::decision::{Decision, ReasonCode};
use crate::rail::Rail;
use crate::table::CutoffTable;

/// Decision engine over a cutoff table and a calendar.
#[derive(Debug, Clone)]
pub struct CutoffEngine<C: Calendar = UnitedStatesFederal> {
    table: CutoffTable,
    calendar: C,
}

impl CutoffEngine {
    /// Engine over `table` using the US federal holiday calendar.
    pub fn new(table: CutoffTable) -> Self {
        Self::with_calendar(table, UnitedStatesFederal::new())
    }
}

impl<C: Calendar> CutoffEngine<C> {
    /// Engine over `table` using a custom calendar.
    pub fn with_calendar(table: CutoffTable, calendar: C) -> Self {
        Self { table, calendar }
    }

    /// The cutoff table.
    pub fn table(&self) -> &CutoffTable {
        &self.table
    }

    /// The business-day calendar.
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    /// Decide when a submission of `rail` at `bank_id`, made on `date` at
    /// `time` (ET), will process.
    ///
    /// A submission exactly at the cutoff minute has missed it.
    ///
    /// # Errors
    /// [`Error::UnknownCutoff`] if the table has no cutoff for the pair, and
    /// [`Error::Date`] if the next business day lies past the last
    /// representable date.
    pub fn decide(
        &self,
        bank_id: &str,
        rail: Rail,
        date: Date,
        time: TimeOfDay,
    ) -> Result<Decision> {
        let cutoff = self
            .table
            .cutoff(bank_id, rail)
            .ok_or_else(|| Error::UnknownCutoff {
                bank: bank_id.to_string(),
                rail: rail.id().to_string(),
            })?;
        let status = self.calendar.classify(date);
        let before_cutoff = time < cutoff;

        let decision = match status {
            DayStatus::Weekend | DayStatus::Holiday(_) => Decision {
                processes_on: self.calendar.next_business_day(date)?,
                is_today: false,
                reason: if status == DayStatus::Weekend {
                    ReasonCode::Weekend
                } else {
                    ReasonCode::Holiday
                },
                detail: format!(
                    "{}. Transfers generally process on the next business day.",
                    status.reason()
                ),
                cutoff,
                submitted: time,
                submitted_on: date,
            },
            DayStatus::BusinessDay if !before_cutoff => Decision {
                processes_on: self.calendar.next_business_day(date)?,
                is_today: false,
                reason: ReasonCode::AfterCutoff,
                detail: format!("Time is after the cutoff ({cutoff} ET) for this selection."),
                cutoff,
                submitted: time,
                submitted_on: date,
            },
            DayStatus::BusinessDay => Decision {
                processes_on: date,
                is_today: true,
                reason: ReasonCode::BeforeCutoff,
                detail: format!(
                    "Time is before the cutoff ({cutoff} ET) and the date is a business day."
                ),
                cutoff,
                submitted: time,
                submitted_on: date,
            },
        };

        tracing::debug!(
            bank = bank_id,
            rail = rail.id(),
            %date,
            %time,
            %cutoff,
            reason = ?decision.reason,
            processes_on = %decision.processes_on,
            "cutoff decision"
        );
        Ok(decision)
    }

    /// String entry point: `date` is `YYYY-MM-DD`, `time` is `HH:MM` (ET).
    ///
    /// Inputs are validated before any calendar logic runs, in this order:
    /// blank fields ([`Error::MissingInput`]), the time
    /// ([`Error::InvalidTime`]), the bank / rail pair
    /// ([`Error::UnknownCutoff`]), then the date ([`Error::InvalidDate`]).
    pub fn decide_str(
        &self,
        bank_id: &str,
        rail_id: &str,
        date: &str,
        time: &str,
    ) -> Result<Decision> {
        let parse = str::parse::<TimeOfDay>;
        self.decide_with(bank_id, rail_id, date, time, parse)
    }

    /// Like [`decide_str`](Self::decide_str), but the time may also be
    /// written loosely (`4:30 pm`, `4pm`); see [`TimeOfDay::parse_lenient`].
    /// The validation order is unchanged.
    pub fn decide_str_lenient(
        &self,
        bank_id: &str,
        rail_id: &str,
        date: &str,
        time: &str,
    ) -> Result<Decision> {
        let parse = TimeOfDay::parse_lenient;
        self.decide_with(bank_id, rail_id, date, time, parse)
    }

    fn decide_with(
        &self,
        bank_id: &str,
        rail_id: &str,
        date: &str,
        time: &str,
        parse_time: impl Fn(&str) -> Result<TimeOfDay>,
    ) -> Result<Decision> {
        let bank_id = required(bank_id, "bank")?;
        let rail_id = required(rail_id, "rail")?;
        let date = required(date, "date")?;
        let time = required(time, "time")?;

        let time = parse_time(time)?;
        let row = self.table.lookup(bank_id, rail_id)?;
        let date: Date = date.parse()?;
        self.decide(&row.bank_id, row.rail, date, time)
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::MissingInput(field));
    }
    Ok(value)
}
