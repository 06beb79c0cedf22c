//! The static bank / rail cutoff table.
//!
//! A [`CutoffTable`] is built once at start-up, either from the built-in
//! data or from a JSON file, and is read-only afterwards.  All cutoffs are
//! Eastern Time.
//!
//! # File format
//!
//! ```json
//! { "banks": [ { "id": "chase", "name": "Chase",
//!                "cutoffs": { "ach_standard": "16:00", "wire": "16:00" } } ] }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use bc_core::ensure;
use bc_core::errors::{Error, Result};
use bc_time::TimeOfDay;
use serde::{Deserialize, Serialize};

use crate::rail::Rail;

/// A bank known to the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bank {
    /// Stable identifier, e.g. `"chase"`.
    pub id: String,
    /// Display name, e.g. `"Chase"`.
    pub name: String,
}

/// One row of the table: the cutoff of a rail at a bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BankRailCutoff {
    /// Bank identifier.
    pub bank_id: String,
    /// Rail.
    pub rail: Rail,
    /// Latest submission time (ET) for same-date processing.
    pub cutoff: TimeOfDay,
}

/// Immutable mapping of (bank, rail) to cutoff time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CutoffTable {
    banks: Vec<Bank>,
    cutoffs: HashMap<(String, Rail), TimeOfDay>,
}

/// One table row, written as `HHMM` literals (`1645` is 16:45).
const fn row(ach_standard: u16, ach_sameday: u16, wire: u16) -> [TimeOfDay; 3] {
    [hhmm(ach_standard), hhmm(ach_sameday), hhmm(wire)]
}

const fn hhmm(t: u16) -> TimeOfDay {
    TimeOfDay::hm((t / 100) as u8, (t % 100) as u8)
}

/// Conservative consumer / small-business online submission cutoffs (ET).
const BUILTIN: [(&str, &str, [TimeOfDay; 3]); 10] = [
    ("chase", "Chase", row(1600, 1645, 1600)),
    ("boa", "Bank of America", row(1700, 1700, 1700)),
    ("wells", "Wells Fargo", row(1700, 1700, 1700)),
    ("citi", "Citi", row(1800, 1800, 1800)),
    ("usbank", "U.S. Bank", row(1800, 1800, 1700)),
    ("pnc", "PNC", row(1800, 1800, 1700)),
    ("capitalone", "Capital One", row(1700, 1700, 1600)),
    ("tdus", "TD Bank (US)", row(1700, 1700, 1630)),
    ("truist", "Truist", row(1900, 1900, 1700)),
    ("ally", "Ally Bank", row(1900, 1900, 1600)),
];

// ── File representation ───────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    banks: Vec<BankEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BankEntry {
    id: String,
    name: String,
    #[serde(default)]
    cutoffs: BTreeMap<String, String>,
}

impl CutoffTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table: ten US banks, three rails each.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (id, name, times) in BUILTIN {
            table.banks.push(Bank {
                id: id.to_string(),
                name: name.to_string(),
            });
            for (rail, cutoff) in Rail::ALL.into_iter().zip(times) {
                table.cutoffs.insert((id.to_string(), rail), cutoff);
            }
        }
        table
    }

    /// Parse a table from its JSON representation.
    ///
    /// Every time must be strict `HH:MM`; unknown rails, duplicate banks, and
    /// unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: TableFile = serde_json::from_str(json)
            .map_err(|e| Error::Config(e.to_string()))?;
        let mut table = Self::new();
        for entry in file.banks {
            table.add_bank(&entry.id, &entry.name)?;
            for (rail_id, time) in &entry.cutoffs {
                let rail: Rail = rail_id
                    .parse()
                    .map_err(|e| Error::Config(format!("bank {:?}: {e}", entry.id)))?;
                let cutoff: TimeOfDay = time
                    .parse()
                    .map_err(|e| Error::Config(format!("bank {:?}, {rail_id}: {e}", entry.id)))?;
                table.set_cutoff(&entry.id, rail, cutoff)?;
            }
        }
        Ok(table)
    }

    /// Read and parse a JSON table file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        let table = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            banks = table.banks.len(),
            cutoffs = table.cutoffs.len(),
            "loaded cutoff table"
        );
        Ok(table)
    }

    /// Serialize to the JSON file format (pretty-printed).
    pub fn to_json(&self) -> Result<String> {
        let file = TableFile {
            banks: self
                .banks
                .iter()
                .map(|b| BankEntry {
                    id: b.id.clone(),
                    name: b.name.clone(),
                    cutoffs: Rail::ALL
                        .into_iter()
                        .filter_map(|r| {
                            let cutoff = self.cutoff(&b.id, r)?;
                            Some((r.id().to_string(), cutoff.to_string()))
                        })
                        .collect(),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&file)
            .map_err(|e| Error::Config(e.to_string()))
    }

    /// Register a bank with no cutoffs yet.
    pub fn add_bank(&mut self, id: &str, name: &str) -> Result<()> {
        let id = id.trim();
        ensure!(
            !id.is_empty(),
            Error::Config("bank id must not be blank".into())
        );
        ensure!(
            self.bank(id).is_none(),
            Error::Config(format!("duplicate bank id {id:?}"))
        );
        self.banks.push(Bank {
            id: id.to_string(),
            name: name.trim().to_string(),
        });
        Ok(())
    }

    /// Set (or replace) the cutoff of `rail` at an already registered bank.
    pub fn set_cutoff(&mut self, bank_id: &str, rail: Rail, cutoff: TimeOfDay) -> Result<()> {
        let bank_id = bank_id.trim();
        ensure!(
            self.bank(bank_id).is_some(),
            Error::Config(format!("unknown bank id {bank_id:?}"))
        );
        self.cutoffs.insert((bank_id.to_string(), rail), cutoff);
        Ok(())
    }

    /// Cutoff of `rail` at `bank_id`, if the table has one.
    pub fn cutoff(&self, bank_id: &str, rail: Rail) -> Option<TimeOfDay> {
        self.cutoffs.get(&(bank_id.to_string(), rail)).copied()
    }

    /// Look up a cutoff by string identifiers.
    ///
    /// # Errors
    /// [`Error::UnknownCutoff`] if the bank or rail is unknown or the pair has
    /// no cutoff.
    pub fn lookup(&self, bank_id: &str, rail_id: &str) -> Result<BankRailCutoff> {
        let unknown = || Error::UnknownCutoff {
            bank: bank_id.to_string(),
            rail: rail_id.to_string(),
        };
        let rail: Rail = rail_id.parse().map_err(|_| unknown())?;
        let cutoff = self.cutoff(bank_id, rail).ok_or_else(unknown)?;
        Ok(BankRailCutoff {
            bank_id: bank_id.to_string(),
            rail,
            cutoff,
        })
    }

    /// The bank with identifier `id`.
    pub fn bank(&self, id: &str) -> Option<&Bank> {
        self.banks.iter().find(|b| b.id == id)
    }

    /// All banks, in insertion order.
    pub fn banks(&self) -> &[Bank] {
        &self.banks
    }

    /// All rows, ordered by bank then rail.
    pub fn entries(&self) -> impl Iterator<Item = BankRailCutoff> + '_ {
        self.banks.iter().flat_map(move |b| {
            Rail::ALL.into_iter().filter_map(move |rail| {
                Some(BankRailCutoff {
                    bank_id: b.id.clone(),
                    rail,
                    cutoff: self.cutoff(&b.id, rail)?,
                })
            })
        })
    }

    /// Number of (bank, rail) cutoffs.
    pub fn len(&self) -> usize {
        self.cutoffs.len()
    }

    /// Return `true` if the table has no cutoffs.
    pub fn is_empty(&self) -> bool {
        self.cutoffs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn builtin_table() {
        let table = CutoffTable::builtin();
        assert_eq!(table.banks().len(), 10);
        assert_eq!(table.len(), 30);
        assert_eq!(table.cutoff("chase", Rail::AchSameDay), Some(t("16:45")));
        assert_eq!(table.cutoff("tdus", Rail::Wire), Some(t("16:30")));
        assert_eq!(table.bank("usbank").unwrap().name, "U.S. Bank");
    }

    #[test]
    fn lookup_unknown_pairs() {
        let table = CutoffTable::builtin();
        assert_eq!(table.lookup("chase", "wire").unwrap().cutoff, t("16:00"));
        for (bank, rail) in [("acme", "wire"), ("chase", "rtp"), ("", "")] {
            assert_eq!(
                table.lookup(bank, rail),
                Err(Error::UnknownCutoff {
                    bank: bank.into(),
                    rail: rail.into()
                })
            );
        }
    }

    #[test]
    fn from_json_partial_table() {
        let table = CutoffTable::from_json(
            r#"{ "banks": [ { "id": "local", "name": "Local CU",
                               "cutoffs": { "ach_standard": "15:30" } } ] }"#,
        )
        .unwrap();
        assert_eq!(table.cutoff("local", Rail::AchStandard), Some(t("15:30")));
        assert!(table.lookup("local", "wire").is_err());
    }

    #[test]
    fn from_json_rejects_bad_rows() {
        let cases = [
            r#"{ "banks": [ { "id": "x", "name": "X", "cutoffs": { "wire": "5pm" } } ] }"#,
            r#"{ "banks": [ { "id": "x", "name": "X", "cutoffs": { "rtp": "17:00" } } ] }"#,
            r#"{ "banks": [ { "id": "x", "name": "X" }, { "id": "x", "name": "X2" } ] }"#,
            r#"{ "banks": [ { "id": " ", "name": "Blank" } ] }"#,
            r#"{ "banks": [ { "id": "x", "name": "X", "cutoff": {} } ] }"#,
            r#"{ "bank": [] }"#,
            "not json",
        ];
        for json in cases {
            assert!(
                matches!(CutoffTable::from_json(json), Err(Error::Config(_))),
                "{json} should be rejected"
            );
        }
    }

    #[test]
    fn json_export_reloads_to_the_same_table() {
        let table = CutoffTable::builtin();
        let reloaded = CutoffTable::from_json(&table.to_json().unwrap()).unwrap();
        assert_eq!(reloaded, table);
    }

    #[test]
    fn entries_are_ordered_by_bank_then_rail() {
        let table = CutoffTable::builtin();
        let first: Vec<_> = table
            .entries()
            .take(3)
            .map(|e| (e.bank_id, e.rail))
            .collect();
        assert_eq!(
            first,
            vec![
                ("chase".to_string(), Rail::AchStandard),
                ("chase".to_string(), Rail::AchSameDay),
                ("chase".to_string(), Rail::Wire),
            ]
        );
    }
}
