//! `Date` type: a plain calendar date with no time-of-day or timezone.
//!
//! Dates are stored as a serial number of days since an epoch so that
//! ordering, hashing, and day arithmetic are single integer operations.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1900-01-01 to 2199-12-31.

use std::str::FromStr;

use bc_core::errors::{Error, Result};
use bc_core::utilities::data_parsers::parse_iso_date;
use bc_core::{ensure, fail};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date represented as a serial number.
///
/// `Display` renders the ISO form `YYYY-MM-DD`, which is also the string
/// form used for serialization and parsing.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        ensure!(
            (1900..=2199).contains(&year),
            Error::Date(format!("year {year} out of range [1900, 2199]"))
        );
        ensure!(
            (1..=12).contains(&month),
            Error::Date(format!("month {month} out of range [1, 12]"))
        );
        let days_in = days_in_month(year, month);
        ensure!(
            day != 0 && day <= days_in,
            Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            ))
        );
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from a serial number (1 = 1900-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        ensure!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            Error::Date(format!("serial {serial} outside the supported range"))
        );
        Ok(Date(serial))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month()).unwrap_or(Month::January)
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 is a Monday (ordinal 1); the remainder is always in 1..=7.
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).unwrap_or(Weekday::Monday)
    }

    /// Return `true` if this is December 31.
    pub fn is_new_years_eve(&self) -> bool {
        let (_, m, d) = self.ymd();
        m == 12 && d == 31
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) if (Self::MIN.0..=Self::MAX.0).contains(&serial) => Ok(Date(serial)),
            _ => fail!("{} {n:+} days leaves the supported range", self),
        }
    }

    /// Return the following calendar day.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the *n*-th occurrence of `weekday` in `month` of `year`.
    ///
    /// For example, `nth_weekday(4, Weekday::Thursday, 2024, 11)` is
    /// Thanksgiving 2024 (2024-11-28).
    ///
    /// # Errors
    /// Returns an error if `n` is zero, if the month has fewer than `n` such
    /// weekdays, or if the date is out of range.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        ensure!(n >= 1, Error::Date("nth_weekday: n must be >= 1".into()));
        let first = Date::from_ymd(year, month, 1)?;
        let offset = u32::from(first.weekday().days_until(weekday));
        let day = 1 + offset + 7 * (u32::from(n) - 1);
        ensure!(
            day <= u32::from(days_in_month(year, month)),
            Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            ))
        );
        Date::from_ymd(year, month, day as u8)
    }

    /// Return the last occurrence of `weekday` in `month` of `year`.
    ///
    /// `last_weekday(Weekday::Monday, 2024, 5)` is Memorial Day 2024
    /// (2024-05-27).
    pub fn last_weekday(weekday: Weekday, year: u16, month: u8) -> Result<Self> {
        let last = Date::from_ymd(year, month, days_in_month(year, month))?;
        let back = weekday.days_until(last.weekday());
        last.add_days(-i32::from(back))
    }

    // ── Formatting ────────────────────────────────────────────────────────────

    /// Long English form, e.g. `Tuesday, July 1, 2025`.
    pub fn long_format(&self) -> String {
        let (y, _, d) = self.ymd();
        format!("{}, {} {d}, {y}", self.weekday(), self.month_of_year())
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse a strict `YYYY-MM-DD` string.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDate(s.trim().to_string());
        let (y, m, d) = parse_iso_date(s).ok_or_else(invalid)?;
        Date::from_ymd(y, m, d).map_err(|_| invalid())
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = u16::try_from(d.year())
            .map_err(|_| Error::Date(format!("year {} out of range", d.year())))?;
        Date::from_ymd(year, d.month() as u8, d.day() as u8)
    }
}

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(d: Date) -> Self {
        let (y, m, day) = d.ymd();
        chrono::NaiveDate::from_ymd_opt(i32::from(y), u32::from(m), u32::from(day))
            .unwrap_or(chrono::NaiveDate::MIN)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

/// Convert (year, month, day) to a serial number.  Serial 1 = 1900-01-01.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    // Days in whole years 1900..year, plus one per leap year in that span.
    let mut serial = (y - 1900) * 365;
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
