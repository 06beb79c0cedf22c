//! `Rail`: the transfer network a payment travels on.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A transfer rail.
///
/// Same Day ACH and standard ACH differ only in their cutoff times; the
/// holiday and roll-forward rules are identical for every rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rail {
    /// Standard (next-day settlement) ACH.
    #[serde(rename = "ach_standard")]
    AchStandard,
    /// Same Day ACH.
    #[serde(rename = "ach_sameday")]
    AchSameDay,
    /// Domestic wire transfer.
    #[serde(rename = "wire")]
    Wire,
}

impl Rail {
    /// All rails, in display order.
    pub const ALL: [Rail; 3] = [Rail::AchStandard, Rail::AchSameDay, Rail::Wire];

    /// Stable identifier used in tables and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            Rail::AchStandard => "ach_standard",
            Rail::AchSameDay => "ach_sameday",
            Rail::Wire => "wire",
        }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Rail::AchStandard => "ACH (Standard)",
            Rail::AchSameDay => "ACH (Same Day)",
            Rail::Wire => "Wire (Domestic)",
        }
    }
}

impl std::fmt::Display for Rail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a rail identifier is not recognised.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown rail {0:?} (expected one of ach_standard, ach_sameday, wire)")]
pub struct UnknownRail(pub String);

impl FromStr for Rail {
    type Err = UnknownRail;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Rail::ALL
            .into_iter()
            .find(|r| r.id() == s)
            .ok_or_else(|| UnknownRail(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ids() {
        assert_eq!("ach_sameday".parse::<Rail>(), Ok(Rail::AchSameDay));
        assert_eq!(" wire ".parse::<Rail>(), Ok(Rail::Wire));
        assert_eq!("rtp".parse::<Rail>(), Err(UnknownRail("rtp".into())));
    }

    #[test]
    fn serde_uses_ids() {
        let json = serde_json::to_string(&Rail::AchStandard).unwrap();
        assert_eq!(json, "\"ach_standard\"");
        let r: Rail = serde_json::from_str("\"ach_sameday\"").unwrap();
        assert_eq!(r, Rail::AchSameDay);
    }
}
