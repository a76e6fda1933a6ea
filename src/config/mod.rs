//! Configuration module for expense-report
//!
//! - Config directory resolution
//! - Rendering settings persistence

pub mod paths;
pub mod settings;

pub use paths::ReportPaths;
pub use settings::{PageSettings, ReportSettings, StreamSettings};
