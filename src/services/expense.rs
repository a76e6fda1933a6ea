//! Expense listing
//!
//! Filters a user's records, orders them newest first and cuts out one page.

use chrono::NaiveDate;

use crate::error::ReportResult;
use crate::models::{CategoryLabel, ExpenseRecord};
use crate::pagination::{create_pagination_result, PaginatedResponse, PaginationParams};

/// Optional constraints for listing expenses
///
/// A missing bound leaves that side of the range open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category: Option<CategoryLabel>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn to_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn in_category(mut self, category: CategoryLabel) -> Self {
        self.category = Some(category);
        self
    }

    /// Whether a record passes every set constraint
    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        if let Some(start) = self.start_date {
            if record.occurred_on < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if record.occurred_on > end {
                return false;
            }
        }
        if let Some(category) = self.category {
            if record.category != category {
                return false;
            }
        }
        true
    }
}

/// List one page of matching expenses, newest first
///
/// Records on the same date keep their input order. Asking for a page past
/// the end yields an empty page with accurate metadata.
pub fn list_expenses(
    records: &[ExpenseRecord],
    filter: &ExpenseFilter,
    params: &PaginationParams,
) -> ReportResult<PaginatedResponse<ExpenseRecord>> {
    let skip = params.skip()?;

    let mut matching: Vec<&ExpenseRecord> = records.iter().filter(|r| filter.matches(r)).collect();
    matching.sort_by(|a, b| b.occurred_on.cmp(&a.occurred_on));

    let total = matching.len() as u64;
    let data = matching
        .into_iter()
        .skip(usize::try_from(skip).unwrap_or(usize::MAX))
        .take(params.limit as usize)
        .cloned()
        .collect();

    create_pagination_result(data, total, params.page, params.limit).into_response()
}
