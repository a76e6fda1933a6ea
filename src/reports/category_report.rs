//! Category report model
//!
//! The single value every renderer consumes. Built fresh per request and
//! never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};
use crate::models::{CategoryLabel, Money};

/// Date format accepted for report periods
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// An inclusive `[start, end]` range of calendar dates
///
/// Keeps the caller's literal strings so reports echo them verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPeriod {
    start_date: String,
    end_date: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportPeriod {
    /// Parse a period from two `YYYY-MM-DD` strings
    pub fn parse(start_date: &str, end_date: &str) -> ReportResult<Self> {
        let start = NaiveDate::parse_from_str(start_date, DATE_FORMAT)
            .map_err(|_| ReportError::invalid_date("startDate", start_date))?;
        let end = NaiveDate::parse_from_str(end_date, DATE_FORMAT)
            .map_err(|_| ReportError::invalid_date("endDate", end_date))?;

        Ok(Self {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            start,
            end,
        })
    }

    /// Whether `date` falls within the period, both ends included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Total and count for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: CategoryLabel,
    pub total: Money,
    pub count: u64,
}

impl CategorySummary {
    /// A summary with nothing in it yet
    pub fn empty(category: CategoryLabel) -> Self {
        Self {
            category,
            total: Money::zero(),
            count: 0,
        }
    }

    /// Whether any expense landed in this category
    pub fn has_expenses(&self) -> bool {
        self.count > 0
    }
}

/// Per-category breakdown of expenses over a report period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryReport {
    /// Start of the period, exactly as requested
    pub start_date: String,
    /// End of the period, exactly as requested
    pub end_date: String,
    /// Sum of every category total
    pub total_amount: Money,
    /// One entry per label, highest total first
    pub categories: Vec<CategorySummary>,
}

impl CategoryReport {
    /// Rows worth displaying: categories with at least one expense, in report order
    pub fn breakdown_rows(&self) -> impl Iterator<Item = &CategorySummary> + '_ {
        self.categories.iter().filter(|s| s.has_expenses())
    }

    /// Look up the summary for one label
    pub fn summary_for(&self, category: CategoryLabel) -> Option<&CategorySummary> {
        self.categories.iter().find(|s| s.category == category)
    }

    /// Share of the grand total taken by `summary`, as a fraction in `[0, 1]`
    pub fn share_of(&self, summary: &CategorySummary) -> f64 {
        summary.total.ratio_of(self.total_amount)
    }

    /// Number of expenses across all categories
    pub fn expense_count(&self) -> u64 {
        self.categories.iter().map(|s| s.count).sum()
    }
}
