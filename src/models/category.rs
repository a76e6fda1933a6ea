//! Expense category labels
//!
//! The label set is closed and fixed at compile time. Every category report
//! carries one row per label, in the declaration order below when totals tie.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

/// The fixed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryLabel {
    Food,
    Transportation,
    Entertainment,
    Utilities,
    Healthcare,
    Shopping,
    Education,
    Other,
}

impl CategoryLabel {
    /// Every label, in declaration order
    pub const ALL: [CategoryLabel; 8] = [
        CategoryLabel::Food,
        CategoryLabel::Transportation,
        CategoryLabel::Entertainment,
        CategoryLabel::Utilities,
        CategoryLabel::Healthcare,
        CategoryLabel::Shopping,
        CategoryLabel::Education,
        CategoryLabel::Other,
    ];

    /// Position of this label in [`CategoryLabel::ALL`]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// The wire label ("FOOD", "TRANSPORTATION", ...)
    pub const fn as_str(self) -> &'static str {
        match self {
            CategoryLabel::Food => "FOOD",
            CategoryLabel::Transportation => "TRANSPORTATION",
            CategoryLabel::Entertainment => "ENTERTAINMENT",
            CategoryLabel::Utilities => "UTILITIES",
            CategoryLabel::Healthcare => "HEALTHCARE",
            CategoryLabel::Shopping => "SHOPPING",
            CategoryLabel::Education => "EDUCATION",
            CategoryLabel::Other => "OTHER",
        }
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryLabel {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CategoryLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ReportError::UnknownCategory(s.to_string()))
    }
}
