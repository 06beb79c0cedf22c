//! `Calendar` trait: the business-day evaluator.
//!
//! A calendar classifies each date as a business day, a weekend, or an
//! observed holiday, and walks forward to the next business day.

use serde::Serialize;

use bc_core::errors::Result;

use crate::date::Date;
use crate::holidays::FederalHoliday;
use crate::weekday::Weekday;

/// Why a date is, or is not, a business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "holiday", rename_all = "snake_case")]
pub enum DayStatus {
    /// A weekday that is not a holiday.
    BusinessDay,
    /// Saturday or Sunday.
    Weekend,
    /// The observed date of a federal holiday.
    Holiday(FederalHoliday),
}

impl DayStatus {
    /// Return `true` for [`DayStatus::BusinessDay`].
    pub fn is_business_day(&self) -> bool {
        matches!(self, DayStatus::BusinessDay)
    }

    /// Short explanation suitable for end users.
    pub fn reason(&self) -> &'static str {
        match self {
            DayStatus::BusinessDay => "Business day",
            DayStatus::Weekend => "Weekend",
            DayStatus::Holiday(_) => "US federal holiday (observed)",
        }
    }
}

/// A business-day calendar.
///
/// Implementors only provide [`name`](Self::name) and
/// [`classify`](Self::classify); everything else is derived.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"US Federal (observed)"`).
    fn name(&self) -> &str;

    /// Classify `date`.  Weekends must be reported before holidays.
    fn classify(&self, date: Date) -> DayStatus;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool {
        self.classify(date).is_business_day()
    }

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` falls on a Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// First business day strictly after `date`.
    ///
    /// # Errors
    /// Fails only if the search runs past [`Date::MAX`].
    fn next_business_day(&self, date: Date) -> Result<Date> {
        let mut d = date.succ()?;
        while !self.is_business_day(d) {
            d = d.succ()?;
        }
        Ok(d)
    }

    /// Advance `date` by `n` business days (backwards if `n` is negative).
    fn advance_business_days(&self, mut date: Date, n: i32) -> Result<Date> {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.unsigned_abs();
        while remaining > 0 {
            date = date.add_days(step)?;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Negative if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        let sign = if d2 >= d1 { 1 } else { -1 };
        let (start, end) = if d2 >= d1 { (d1, d2) } else { (d2, d1) };
        let count = (start.serial() + 1..=end.serial())
            .filter_map(|s| Date::from_serial(s).ok())
            .filter(|d| self.is_business_day(*d))
            .count() as i32;
        sign * count
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn classify(&self, date: Date) -> DayStatus {
        match date.weekday() {
            Weekday::Saturday | Weekday::Sunday => DayStatus::Weekend,
            _ => DayStatus::BusinessDay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly;
        // 2023-09-02 is a Saturday
        assert_eq!(cal.classify(date(2023, 9, 2)), DayStatus::Weekend);
        assert!(cal.is_business_day(date(2023, 9, 4)));
    }

    #[test]
    fn next_business_day_skips_weekend() {
        let cal = WeekendsOnly;
        let next = |d: Date| cal.next_business_day(d).unwrap();
        // Friday → Monday, Saturday → Monday
        assert_eq!(next(date(2023, 9, 1)), date(2023, 9, 4));
        assert_eq!(next(date(2023, 9, 2)), date(2023, 9, 4));
        // Monday → Tuesday
        assert_eq!(next(date(2023, 9, 4)), date(2023, 9, 5));
    }

    #[test]
    fn next_business_day_at_end_of_range() {
        // 2199-12-31 is a Tuesday; nothing follows it.
        assert!(WeekendsOnly.next_business_day(Date::MAX).is_err());
    }

    #[test]
    fn advance_and_count() {
        let cal = WeekendsOnly;
        let mon = date(2023, 9, 4);
        let fri = date(2023, 9, 8);
        assert_eq!(cal.business_days_between(mon, fri), 4);
        assert_eq!(cal.business_days_between(fri, mon), -4);
        assert_eq!(cal.business_days_between(mon, mon), 0);
        assert_eq!(cal.advance_business_days(fri, 1), Ok(date(2023, 9, 11)));
        assert_eq!(cal.advance_business_days(mon, -1), Ok(date(2023, 9, 1)));
    }

    #[test]
    fn advance_past_the_supported_range_is_an_error() {
        let cal = WeekendsOnly;
        let mon = date(2023, 9, 4);
        assert!(cal.advance_business_days(mon, i32::MIN).is_err());
        assert!(cal.advance_business_days(mon, i32::MAX).is_err());
    }

    #[test]
    fn reasons() {
        assert_eq!(DayStatus::Weekend.reason(), "Weekend");
        assert_eq!(
            DayStatus::Holiday(FederalHoliday::Christmas).reason(),
            "US federal holiday (observed)"
        );
    }
}
