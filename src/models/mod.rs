//! Core data models for expense-report
//!
//! Expense records as handed over by the storage collaborator, the fixed
//! category label set, and the money type used for every amount.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;

pub use category::CategoryLabel;
pub use expense::ExpenseRecord;
pub use ids::{ExpenseId, UserId};
pub use money::Money;
