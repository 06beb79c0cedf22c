//! United States federal calendar (observed holidays).

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::calendar::{Calendar, DayStatus};
use crate::date::Date;
use crate::holidays::{observed_holidays, HolidaySet};

/// United States: federal holidays as observed by banks.
///
/// Holidays:
/// * New Year's Day (Jan 1; if Sat → Fri Dec 31 of the prior year; if Sun → Mon)
/// * Martin Luther King Jr. Day (3rd Mon in Jan)
/// * Presidents' Day (3rd Mon in Feb)
/// * Memorial Day (last Mon in May)
/// * Juneteenth (Jun 19, from 2021; if Sat → Fri; if Sun → Mon)
/// * Independence Day (Jul 4; if Sat → Fri; if Sun → Mon)
/// * Labor Day (1st Mon in Sep)
/// * Columbus Day (2nd Mon in Oct)
/// * Veterans' Day (Nov 11; if Sat → Fri; if Sun → Mon)
/// * Thanksgiving Day (4th Thu in Nov)
/// * Christmas Day (Dec 25; if Sat → Fri; if Sun → Mon)
///
/// Holiday sets are computed once per year and memoized; clones share the
/// cache.
#[derive(Debug, Clone, Default)]
pub struct UnitedStatesFederal {
    cache: Arc<RwLock<HashMap<u16, Arc<HolidaySet>>>>,
}

impl UnitedStatesFederal {
    /// Create a calendar with an empty holiday cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observed holidays of `year`, computed on first use.
    pub fn holidays(&self, year: u16) -> Arc<HolidaySet> {
        // The cached sets are immutable, so a poisoned lock still holds valid data.
        if let Some(set) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year)
        {
            return Arc::clone(set);
        }
        tracing::trace!(year, "computing observed federal holidays");
        let set = Arc::new(observed_holidays(year));
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cache.entry(year).or_insert(set))
    }
}

impl Calendar for UnitedStatesFederal {
    fn name(&self) -> &str {
        "US Federal (observed)"
    }

    fn classify(&self, date: Date) -> DayStatus {
        if self.is_weekend(date) {
            return DayStatus::Weekend;
        }
        let year = date.year();
        if let Some(h) = self.holidays(year).holiday_on(date) {
            return DayStatus::Holiday(h);
        }
        // New Year's Day of the next year may be observed on December 31.
        if date.is_new_years_eve() {
            if let Some(h) = self.holidays(year + 1).holiday_on(date) {
                return DayStatus::Holiday(h);
            }
        }
        DayStatus::BusinessDay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holidays::FederalHoliday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn independence_day_2025() {
        let cal = UnitedStatesFederal::new();
        // July 4, 2025 is a Friday
        assert_eq!(
            cal.classify(date(2025, 7, 4)),
            DayStatus::Holiday(FederalHoliday::IndependenceDay)
        );
    }

    #[test]
    fn thanksgiving_2023() {
        let cal = UnitedStatesFederal::new();
        // 4th Thursday of November 2023 = Nov 23
        assert!(!cal.is_business_day(date(2023, 11, 23)));
    }

    #[test]
    fn new_years_eve_carry_back() {
        let cal = UnitedStatesFederal::new();
        // January 1, 2022 is a Saturday
        assert_eq!(
            cal.classify(date(2021, 12, 31)),
            DayStatus::Holiday(FederalHoliday::NewYearsDay)
        );
        // January 1, 2026 is a Thursday: Dec 31, 2025 is an ordinary Wednesday
        assert!(cal.is_business_day(date(2025, 12, 31)));
    }

    #[test]
    fn weekend_is_reported_before_holiday() {
        let cal = UnitedStatesFederal::new();
        // Christmas 2022 falls on a Sunday; the Sunday itself is a weekend.
        assert_eq!(cal.classify(date(2022, 12, 25)), DayStatus::Weekend);
        assert_eq!(
            cal.classify(date(2022, 12, 26)),
            DayStatus::Holiday(FederalHoliday::Christmas)
        );
    }

    #[test]
    fn cache_is_shared_between_clones() {
        let cal = UnitedStatesFederal::new();
        let copy = cal.clone();
        let a = cal.holidays(2030);
        let b = copy.holidays(2030);
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn normal_day() {
        let cal = UnitedStatesFederal::new();
        assert!(cal.is_business_day(date(2023, 6, 15)));
    }
}
