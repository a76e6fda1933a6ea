//! Path management for expense-report
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSE_REPORT_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/expense-report` on Linux,
//!    `~/Library/Application Support/expense-report` on macOS,
//!    `%APPDATA%\expense-report\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ReportError;

/// Environment variable that overrides the config directory
pub const CONFIG_DIR_ENV: &str = "EXPENSE_REPORT_CONFIG_DIR";

/// Manages all paths used by expense-report
#[derive(Debug, Clone)]
pub struct ReportPaths {
    /// Base directory for configuration
    base_dir: PathBuf,
}

impl ReportPaths {
    /// Resolve the config directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ReportError> {
        let base_dir = match std::env::var_os(CONFIG_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "expense-report")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    ReportError::Config("Could not determine a config directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create ReportPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), ReportError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ReportError::Io(format!("Failed to create config directory: {}", e)))
    }
}
