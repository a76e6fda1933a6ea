//! Custom error types for expense-report
//!
//! This module defines the error hierarchy for the library using thiserror.
//! Contract violations (bad input from an upstream collaborator) and render
//! failures are kept as distinct variants so the transport layer can tell
//! them apart.

use thiserror::Error;

/// The main error type for expense-report operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV input errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A date string that is not `YYYY-MM-DD`
    #[error("Invalid {field}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    /// A category label outside the fixed set
    #[error("Unknown expense category: {0}")]
    UnknownCategory(String),

    /// Pagination request with a zero page or limit
    #[error("Invalid pagination: page={page}, limit={limit} (both must be >= 1)")]
    InvalidPagination { page: u32, limit: u32 },

    /// Any other broken input invariant
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// Document generation failed
    #[error("Failed to render {format} report: {message}")]
    Render {
        format: &'static str,
        message: String,
    },

    /// A streamed document was terminated before completion
    #[error("Report stream aborted: {0}")]
    StreamAborted(String),
}

impl ReportError {
    /// Create a render failure for the given output format
    pub fn render(format: &'static str, message: impl Into<String>) -> Self {
        Self::Render {
            format,
            message: message.into(),
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidDate {
            field,
            value: value.into(),
        }
    }

    /// Check if this error means the caller handed us input that breaks an invariant
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::UnknownCategory(_) | Self::InvalidPagination { .. } | Self::ContractViolation(_)
        )
    }

    /// Check if this error came out of a document renderer
    pub fn is_render_failure(&self) -> bool {
        matches!(self, Self::Render { .. } | Self::StreamAborted(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidDate { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for ReportError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for expense-report operations
pub type ReportResult<T> = Result<T, ReportError>;
