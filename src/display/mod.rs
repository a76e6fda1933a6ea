//! Display formatting for terminal output
//!
//! Turns reports and expense pages into text for the CLI.

pub mod expense;
pub mod report;

pub use expense::{format_expense_page, format_expense_row, format_page_footer};
pub use report::{format_bar, format_category_report, format_percentage};
