//! Integration tests for the US federal calendar and the business-day
//! evaluator.

use bc_time::calendar::{Calendar, DayStatus};
use bc_time::holidays::{observed_holidays, FederalHoliday};
use bc_time::{Date, UnitedStatesFederal, Weekday};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Collect all non-weekend holidays in the inclusive range `[from, to]`.
fn holiday_list(cal: &dyn Calendar, from: Date, to: Date) -> Vec<Date> {
    let mut holidays = Vec::new();
    let mut d = from;
    while d <= to {
        if cal.is_holiday(d) && !cal.is_weekend(d) {
            holidays.push(d);
        }
        d = d.succ().unwrap();
    }
    holidays
}

/// Assert that the holidays in `[from, to]` are exactly `expected`.
fn check_holidays(cal: &dyn Calendar, from: Date, to: Date, expected: &[Date]) {
    let calculated = holiday_list(cal, from, to);
    for d in &calculated {
        assert!(
            expected.contains(d),
            "{}: {d} calculated as holiday but not expected ({})",
            cal.name(),
            d.weekday()
        );
    }
    for d in expected {
        assert!(
            calculated.contains(d),
            "{}: {d} expected as holiday but not found ({})",
            cal.name(),
            d.weekday()
        );
    }
}

// ─── US federal holidays ──────────────────────────────────────────────────────

#[test]
fn test_us_federal_holidays_2021_2024() {
    let expected = vec![
        // 2021
        date(2021, 1, 1),
        date(2021, 1, 18),
        date(2021, 2, 15),
        date(2021, 5, 31),
        date(2021, 6, 18),
        date(2021, 7, 5),
        date(2021, 9, 6),
        date(2021, 10, 11),
        date(2021, 11, 11),
        date(2021, 11, 25),
        date(2021, 12, 24),
        date(2021, 12, 31), // New Year's Day 2022 (a Saturday)
        // 2022
        date(2022, 1, 17),
        date(2022, 2, 21),
        date(2022, 5, 30),
        date(2022, 6, 20),
        date(2022, 7, 4),
        date(2022, 9, 5),
        date(2022, 10, 10),
        date(2022, 11, 11),
        date(2022, 11, 24),
        date(2022, 12, 26),
        // 2023
        date(2023, 1, 2),
        date(2023, 1, 16),
        date(2023, 2, 20),
        date(2023, 5, 29),
        date(2023, 6, 19),
        date(2023, 7, 4),
        date(2023, 9, 4),
        date(2023, 10, 9),
        date(2023, 11, 10),
        date(2023, 11, 23),
        date(2023, 12, 25),
        // 2024
        date(2024, 1, 1),
        date(2024, 1, 15),
        date(2024, 2, 19),
        date(2024, 5, 27),
        date(2024, 6, 19),
        date(2024, 7, 4),
        date(2024, 9, 2),
        date(2024, 10, 14),
        date(2024, 11, 11),
        date(2024, 11, 28),
        date(2024, 12, 25),
    ];
    let cal = UnitedStatesFederal::new();
    check_holidays(&cal, date(2021, 1, 1), date(2024, 12, 31), &expected);
}

#[test]
fn test_new_years_day_on_saturday_is_observed_on_prior_friday() {
    let cal = UnitedStatesFederal::new();
    for y in 1901..=2199u16 {
        if date(y, 1, 1).weekday() != Weekday::Saturday {
            continue;
        }
        let eve = date(y - 1, 12, 31);
        assert_eq!(eve.weekday(), Weekday::Friday);
        assert_eq!(
            cal.classify(eve),
            DayStatus::Holiday(FederalHoliday::NewYearsDay),
            "{eve} should observe New Year's Day {y}"
        );
        // The carry-back is not part of the prior year's own set.
        assert!(!observed_holidays(y - 1).contains(eve));
        assert!(observed_holidays(y).contains(eve));
    }
}

#[test]
fn test_juneteenth_only_from_2021() {
    let cal = UnitedStatesFederal::new();
    // June 19, 2020 was a Friday.
    assert!(cal.is_business_day(date(2020, 6, 19)));
    // June 19, 2024 is a Wednesday.
    assert!(!cal.is_business_day(date(2024, 6, 19)));
}

#[test]
fn test_next_business_day_over_holiday_weekends() {
    let cal = UnitedStatesFederal::new();
    let next = |d: Date| cal.next_business_day(d).unwrap();
    // Independence Day 2025 (Fri) → Monday July 7
    assert_eq!(next(date(2025, 7, 3)), date(2025, 7, 7));
    assert_eq!(next(date(2025, 7, 4)), date(2025, 7, 7));
    // Thu Dec 30, 2021 → Fri Dec 31 is New Year's observed → Mon Jan 3, 2022
    assert_eq!(next(date(2021, 12, 30)), date(2022, 1, 3));
    // Christmas Eve 2021 (observed Christmas) on a Friday
    assert_eq!(next(date(2021, 12, 23)), date(2021, 12, 27));
    // Saturday before Labor Day 2025
    assert_eq!(next(date(2025, 8, 30)), date(2025, 9, 2));
}

#[test]
fn test_holiday_sets_have_weekday_dates() {
    for y in 1900..=2199u16 {
        let set = observed_holidays(y);
        let expected_len = if y >= 2021 { 11 } else { 10 };
        assert_eq!(set.len(), expected_len, "year {y}");
        for (d, h) in set.iter() {
            assert!(!d.weekday().is_weekend(), "{h} observed on weekend {d}");
        }
    }
}

#[test]
fn test_day_status_serializes_with_holiday_name() {
    let status = DayStatus::Holiday(FederalHoliday::IndependenceDay);
    assert_eq!(
        serde_json::to_string(&status).unwrap(),
        r#"{"kind":"holiday","holiday":"independence_day"}"#
    );
    assert_eq!(
        serde_json::to_string(&DayStatus::Weekend).unwrap(),
        r#"{"kind":"weekend"}"#
    );
}
