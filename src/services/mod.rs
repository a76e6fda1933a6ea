//! Service layer for expense-report
//!
//! Loading, listing and report generation on top of the core report model.

pub mod expense;
pub mod import;
pub mod report;

pub use expense::{list_expenses, ExpenseFilter};
pub use import::{load_expenses_csv, load_expenses_file, load_expenses_json, InputFormat};
pub use report::{ReportOutput, ReportService};
