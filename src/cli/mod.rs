//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod report;

pub use expense::{handle_list_command, ListArgs};
pub use report::{handle_report_command, OutputFormat, ReportArgs};
