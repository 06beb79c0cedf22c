//! US federal holidays and their observed dates.
//!
//! Each [`FederalHoliday`] carries a [`HolidayRule`]; [`observed_holidays`]
//! evaluates all eleven rules for one year into a [`HolidaySet`].
//!
//! Fixed-date holidays falling on a Saturday are observed on the preceding
//! Friday and those falling on a Sunday on the following Monday.  Weekday-rule
//! holidays already land on a weekday and are never shifted.
//!
//! New Year's Day is the only holiday whose observance can leave its own
//! year: when January 1 of `Y` is a Saturday it is observed on December 31
//! of `Y - 1`.  That date is still reported as part of year `Y`'s set, so a
//! caller testing a December 31 must also consult the following year.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::date::Date;
use crate::month::Month;
use crate::weekday::Weekday;

/// How the calendar date of a holiday is determined in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayRule {
    /// A fixed month/day, shifted off weekends.
    Fixed {
        /// Month of the holiday.
        month: Month,
        /// Day of the month.
        day: u8,
        /// First year in which the holiday exists, if it is recent.
        since: Option<u16>,
    },
    /// The `n`-th given weekday of a month.
    NthWeekday {
        /// Occurrence (1-based).
        n: u8,
        /// Weekday.
        weekday: Weekday,
        /// Month.
        month: Month,
    },
    /// The last given weekday of a month.
    LastWeekday {
        /// Weekday.
        weekday: Weekday,
        /// Month.
        month: Month,
    },
}

impl HolidayRule {
    /// Return the observed date of this rule in `year`.
    ///
    /// Returns `None` when the holiday did not exist yet in `year`, or when the
    /// observed date falls outside the representable date range.
    pub fn observed_in(&self, year: u16) -> Option<Date> {
        match *self {
            HolidayRule::Fixed { month, day, since } => {
                if since.is_some_and(|first| year < first) {
                    return None;
                }
                let actual = Date::from_ymd(year, month.number(), day).ok()?;
                let shift = match actual.weekday() {
                    Weekday::Saturday => -1,
                    Weekday::Sunday => 1,
                    _ => 0,
                };
                actual.add_days(shift).ok()
            }
            HolidayRule::NthWeekday { n, weekday, month } => {
                Date::nth_weekday(n, weekday, year, month.number()).ok()
            }
            HolidayRule::LastWeekday { weekday, month } => {
                Date::last_weekday(weekday, year, month.number()).ok()
            }
        }
    }
}

/// The eleven US federal holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FederalHoliday {
    /// New Year's Day (January 1).
    NewYearsDay,
    /// Birthday of Martin Luther King Jr. (third Monday in January).
    MartinLutherKingJrDay,
    /// Washington's Birthday (third Monday in February).
    PresidentsDay,
    /// Memorial Day (last Monday in May).
    MemorialDay,
    /// Juneteenth National Independence Day (June 19, from 2021).
    Juneteenth,
    /// Independence Day (July 4).
    IndependenceDay,
    /// Labor Day (first Monday in September).
    LaborDay,
    /// Columbus Day (second Monday in October).
    ColumbusDay,
    /// Veterans Day (November 11).
    VeteransDay,
    /// Thanksgiving Day (fourth Thursday in November).
    Thanksgiving,
    /// Christmas Day (December 25).
    Christmas,
}

impl FederalHoliday {
    /// All federal holidays in calendar order.
    pub const ALL: [FederalHoliday; 11] = [
        FederalHoliday::NewYearsDay,
        FederalHoliday::MartinLutherKingJrDay,
        FederalHoliday::PresidentsDay,
        FederalHoliday::MemorialDay,
        FederalHoliday::Juneteenth,
        FederalHoliday::IndependenceDay,
        FederalHoliday::LaborDay,
        FederalHoliday::ColumbusDay,
        FederalHoliday::VeteransDay,
        FederalHoliday::Thanksgiving,
        FederalHoliday::Christmas,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            FederalHoliday::NewYearsDay => "New Year's Day",
            FederalHoliday::MartinLutherKingJrDay => "Martin Luther King Jr. Day",
            FederalHoliday::PresidentsDay => "Presidents Day",
            FederalHoliday::MemorialDay => "Memorial Day",
            FederalHoliday::Juneteenth => "Juneteenth",
            FederalHoliday::IndependenceDay => "Independence Day",
            FederalHoliday::LaborDay => "Labor Day",
            FederalHoliday::ColumbusDay => "Columbus Day",
            FederalHoliday::VeteransDay => "Veterans Day",
            FederalHoliday::Thanksgiving => "Thanksgiving Day",
            FederalHoliday::Christmas => "Christmas Day",
        }
    }

    /// The rule that places this holiday in a year.
    pub fn rule(&self) -> HolidayRule {
        use HolidayRule::{Fixed, LastWeekday, NthWeekday};
        match self {
            FederalHoliday::NewYearsDay => Fixed {
                month: Month::January,
                day: 1,
                since: None,
            },
            FederalHoliday::MartinLutherKingJrDay => NthWeekday {
                n: 3,
                weekday: Weekday::Monday,
                month: Month::January,
            },
            FederalHoliday::PresidentsDay => NthWeekday {
                n: 3,
                weekday: Weekday::Monday,
                month: Month::February,
            },
            FederalHoliday::MemorialDay => LastWeekday {
                weekday: Weekday::Monday,
                month: Month::May,
            },
            FederalHoliday::Juneteenth => Fixed {
                month: Month::June,
                day: 19,
                since: Some(2021),
            },
            FederalHoliday::IndependenceDay => Fixed {
                month: Month::July,
                day: 4,
                since: None,
            },
            FederalHoliday::LaborDay => NthWeekday {
                n: 1,
                weekday: Weekday::Monday,
                month: Month::September,
            },
            FederalHoliday::ColumbusDay => NthWeekday {
                n: 2,
                weekday: Weekday::Monday,
                month: Month::October,
            },
            FederalHoliday::VeteransDay => Fixed {
                month: Month::November,
                day: 11,
                since: None,
            },
            FederalHoliday::Thanksgiving => NthWeekday {
                n: 4,
                weekday: Weekday::Thursday,
                month: Month::November,
            },
            FederalHoliday::Christmas => Fixed {
                month: Month::December,
                day: 25,
                since: None,
            },
        }
    }
}

impl std::fmt::Display for FederalHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The observed federal holidays of one year.
///
/// Entries are kept in date order.  Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    year: u16,
    dates: BTreeMap<Date, FederalHoliday>,
}

impl HolidaySet {
    /// The year whose holidays this set holds.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Return `true` if `date` is an observed holiday in this set.
    pub fn contains(&self, date: Date) -> bool {
        self.dates.contains_key(&date)
    }

    /// Return the holiday observed on `date`, if any.
    pub fn holiday_on(&self, date: Date) -> Option<FederalHoliday> {
        self.dates.get(&date).copied()
    }

    /// Number of observed dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if the set has no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Iterate `(observed date, holiday)` pairs in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, FederalHoliday)> + '_ {
        self.dates.iter().map(|(d, h)| (*d, *h))
    }
}

/// Compute the observed US federal holidays of `year`.
///
/// Pure: the same year always yields the same set.  Years whose observed
/// dates fall outside the representable range simply omit those dates.
pub fn observed_holidays(year: u16) -> HolidaySet {
    let dates = FederalHoliday::ALL
        .iter()
        .filter_map(|h| h.rule().observed_in(year).map(|d| (d, *h)))
        .collect();
    HolidaySet { year, dates }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn holidays_2025() {
        let set = observed_holidays(2025);
        let expected = [
            date(2025, 1, 1),
            date(2025, 1, 20),
            date(2025, 2, 17),
            date(2025, 5, 26),
            date(2025, 6, 19),
            date(2025, 7, 4),
            date(2025, 9, 1),
            date(2025, 10, 13),
            date(2025, 11, 11),
            date(2025, 11, 27),
            date(2025, 12, 25),
        ];
        assert_eq!(set.iter().map(|(d, _)| d).collect::<Vec<_>>(), expected);
        assert_eq!(set.year(), 2025);
    }

    #[test]
    fn juneteenth_starts_in_2021() {
        assert_eq!(observed_holidays(2020).len(), 10);
        // June 19, 2021 was a Saturday: observed Friday the 18th.
        let set = observed_holidays(2021);
        assert_eq!(
            set.holiday_on(date(2021, 6, 18)),
            Some(FederalHoliday::Juneteenth)
        );
    }

    #[test]
    fn weekend_fixed_dates_shift() {
        // July 4, 2026 is a Saturday; Nov 11, 2023 is a Saturday;
        // Dec 25, 2022 is a Sunday.
        assert!(observed_holidays(2026).contains(date(2026, 7, 3)));
        assert!(observed_holidays(2023).contains(date(2023, 11, 10)));
        assert!(observed_holidays(2022).contains(date(2022, 12, 26)));
        assert!(!observed_holidays(2022).contains(date(2022, 12, 25)));
    }

    #[test]
    fn new_years_carry_back_is_reported_in_the_new_year() {
        // January 1, 2022 is a Saturday.
        let set = observed_holidays(2022);
        assert_eq!(
            set.holiday_on(date(2021, 12, 31)),
            Some(FederalHoliday::NewYearsDay)
        );
        assert!(!set.contains(date(2022, 1, 1)));
        assert!(!observed_holidays(2021).contains(date(2021, 12, 31)));
    }

    #[test]
    fn out_of_range_years_drop_unrepresentable_dates() {
        // January 1, 2200 is a Wednesday, so nothing of 2200 is representable.
        assert!(observed_holidays(2200).is_empty());
    }

    #[test]
    fn names() {
        assert_eq!(FederalHoliday::Thanksgiving.to_string(), "Thanksgiving Day");
        assert_eq!(FederalHoliday::ALL.len(), 11);
    }
}
