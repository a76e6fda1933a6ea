//! Expense record model
//!
//! Records are owned by the storage collaborator; this crate only reads them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::CategoryLabel;
use super::ids::{ExpenseId, UserId};
use super::money::Money;
use crate::error::{ReportError, ReportResult};

/// A single dated, categorized expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    /// Unique identifier
    pub id: ExpenseId,

    /// Short title ("Grocery Shopping")
    pub title: String,

    /// Amount spent, never negative
    pub amount: Money,

    /// Calendar date the expense occurred
    #[serde(alias = "expenseDate")]
    pub occurred_on: NaiveDate,

    /// Category label
    pub category: CategoryLabel,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Owning user
    #[serde(alias = "userId")]
    pub owner_id: UserId,
}

impl ExpenseRecord {
    /// Create a new expense with a fresh ID
    pub fn new(
        owner_id: UserId,
        title: impl Into<String>,
        amount: Money,
        occurred_on: NaiveDate,
        category: CategoryLabel,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            title: title.into(),
            amount,
            occurred_on,
            category,
            notes: None,
            owner_id,
        }
    }

    /// Attach notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Check the record invariants
    pub fn validate(&self) -> ReportResult<()> {
        if self.title.trim().is_empty() {
            return Err(ReportError::Validation(format!(
                "Expense {} has an empty title",
                self.id.short()
            )));
        }

        if self.amount.is_negative() {
            return Err(ReportError::ContractViolation(format!(
                "Expense {} has a negative amount ({})",
                self.id.short(),
                self.amount
            )));
        }

        Ok(())
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.occurred_on, self.title, self.amount, self.category
        )
    }
}
