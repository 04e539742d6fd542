//! Frontend Models
//!
//! Calorie records and the totals derived from them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which list a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Gained,
    Burned,
}

impl RecordKind {
    /// Render order: gained rows come before burned rows
    pub const ALL: [RecordKind; 2] = [RecordKind::Gained, RecordKind::Burned];

    pub fn as_str(self) -> &'static str {
        match self {
            RecordKind::Gained => "gained",
            RecordKind::Burned => "burned",
        }
    }

    /// Chart legend label
    pub fn label(self) -> &'static str {
        match self {
            RecordKind::Gained => "Gained",
            RecordKind::Burned => "Burned",
        }
    }

    /// Font Awesome classes for the row's direction indicator
    pub fn indicator_classes(self) -> &'static str {
        match self {
            RecordKind::Gained => "fas fa-caret-up font-bold text-3xl p-2 text-red-600",
            RecordKind::Burned => "fas fa-caret-down font-bold text-3xl p-2 text-green-600",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown record kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for RecordKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gained" => Ok(RecordKind::Gained),
            "burned" => Ok(RecordKind::Burned),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// One calorie entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub amount: f64,
    #[serde(default)]
    pub name: Option<String>,
}

impl Record {
    pub fn new(amount: f64, name: Option<String>) -> Self {
        Self { amount, name }
    }

    /// Amount as shown in the table and edit form
    pub fn amount_text(&self) -> String {
        format!("{}", self.amount)
    }
}

/// Summed amounts per kind
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub gained_total: f64,
    pub burned_total: f64,
}

/// Both sequences plus their sums, as handed to the view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub gained: Vec<Record>,
    pub burned: Vec<Record>,
    pub totals: Totals,
}

impl Summary {
    pub fn records(&self, kind: RecordKind) -> &[Record] {
        match kind {
            RecordKind::Gained => &self.gained,
            RecordKind::Burned => &self.burned,
        }
    }
}
