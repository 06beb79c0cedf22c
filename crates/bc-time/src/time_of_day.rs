//! `TimeOfDay`: a wall-clock time in minutes since midnight.
//!
//! No timezone is attached: all times handled by this workspace are Eastern
//! Time by convention, and callers are responsible for supplying them that
//! way.

use std::str::FromStr;

use bc_core::errors::{Error, Result};
use bc_core::utilities::data_parsers::{parse_clock_lenient, parse_hhmm};
use bc_core::{ensure, Minutes, MINUTES_PER_DAY};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A time of day, always in `0..=1439` minutes since midnight.
///
/// The canonical text form is strict 24-hour `HH:MM`; [`FromStr`] accepts
/// nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(Minutes);

impl TimeOfDay {
    /// Midnight (00:00).
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build a constant time of day.  Out-of-range components fail to compile
    /// when used in a `const` item.
    pub const fn hm(hour: u8, minute: u8) -> Self {
        assert!(hour < 24 && minute < 60, "time of day out of range");
        TimeOfDay(hour as Minutes * 60 + minute as Minutes)
    }

    /// Build from an hour (0–23) and minute (0–59).
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self> {
        ensure!(
            hour < 24 && minute < 60,
            Error::InvalidTime(format!("{hour:02}:{minute:02}"))
        );
        Ok(TimeOfDay(Minutes::from(hour) * 60 + Minutes::from(minute)))
    }

    /// Build from minutes since midnight (0–1439).
    pub fn from_minutes(minutes: Minutes) -> Result<Self> {
        ensure!(
            minutes < MINUTES_PER_DAY,
            Error::InvalidTime(format!("{minutes} minutes past midnight"))
        );
        Ok(TimeOfDay(minutes))
    }

    /// Parse a loosely written clock time such as `4:30 pm`, `4pm`, or `9:05`.
    ///
    /// This is a convenience for interactive input; it never guesses.  Any
    /// string it cannot read unambiguously is an [`Error::InvalidTime`].
    pub fn parse_lenient(s: &str) -> Result<Self> {
        let (h, m) = parse_clock_lenient(s)
            .ok_or_else(|| Error::InvalidTime(s.trim().to_string()))?;
        Self::from_hm(h, m)
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> Minutes {
        self.0
    }

    /// Hour component (0–23).
    pub fn hour(&self) -> u8 {
        (self.0 / 60) as u8
    }

    /// Minute component (0–59).
    pub fn minute(&self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    /// Parse strict 24-hour `HH:MM`, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let (h, m) = parse_hhmm(s)
            .ok_or_else(|| Error::InvalidTime(s.trim().to_string()))?;
        Self::from_hm(h, m)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
