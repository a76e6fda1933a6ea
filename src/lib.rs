//! expense-report - expense aggregation and category report rendering
//!
//! This library totals a user's expenses per category over a date range and
//! renders the result as structured data (JSON, YAML), a streamed PDF
//! document, or an XLSX workbook. It also paginates expense listings.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records, category labels, money and IDs
//! - `pagination`: Page offsets and page metadata
//! - `reports`: Category aggregation and the report model
//! - `export`: JSON, YAML, PDF and XLSX renderers
//! - `services`: Record loading, listing and report generation
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_report::config::ReportSettings;
//! use expense_report::export::ReportFormat;
//! use expense_report::services::ReportService;
//!
//! let settings = ReportSettings::default();
//! let service = ReportService::new(&settings);
//! let output = service.generate(&records, "2024-01-01", "2024-01-31", ReportFormat::Pdf)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod pagination;
pub mod reports;
pub mod services;

pub use error::{ReportError, ReportResult};
