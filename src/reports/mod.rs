//! Reports module for expense-report
//!
//! Aggregates expense records into a per-category report. The report is
//! the shared input of every renderer in [`crate::export`].

pub mod aggregator;
pub mod builder;
pub mod category_report;

pub use aggregator::aggregate;
pub use builder::build_category_report;
pub use category_report::{CategoryReport, CategorySummary, ReportPeriod, DATE_FORMAT};
