//! Rendering settings for expense-report
//!
//! Only presentation lives here: titles, symbols, page geometry, and the
//! PDF stream buffer sizes. Nothing in these settings changes report totals.

use serde::{Deserialize, Serialize};

use super::paths::ReportPaths;
use crate::error::ReportError;

/// Page geometry for the PDF report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSettings {
    pub width_mm: f32,
    pub height_mm: f32,
}

impl Default for PageSettings {
    fn default() -> Self {
        // A4 portrait
        Self {
            width_mm: 210.0,
            height_mm: 297.0,
        }
    }
}

/// Buffering for the streamed PDF report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamSettings {
    /// Bytes collected before a chunk is handed to the consumer
    pub chunk_size: usize,
    /// Chunks the producer may run ahead of the consumer
    pub channel_capacity: usize,
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            chunk_size: 8192,
            channel_capacity: 8,
        }
    }
}

/// User settings for expense-report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Title printed at the top of PDF and XLSX reports
    #[serde(default = "default_title")]
    pub title: String,

    /// Currency symbol used in text output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Worksheet name in XLSX reports
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// strftime format for "generated at" footers
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,

    #[serde(default)]
    pub page: PageSettings,

    #[serde(default)]
    pub stream: StreamSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_title() -> String {
    "Expense Report by Category".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_sheet_name() -> String {
    "Category Report".to_string()
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            title: default_title(),
            currency_symbol: default_currency(),
            sheet_name: default_sheet_name(),
            timestamp_format: default_timestamp_format(),
            page: PageSettings::default(),
            stream: StreamSettings::default(),
        }
    }
}

impl ReportSettings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &ReportPaths) -> Result<Self, ReportError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ReportError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: ReportSettings = serde_json::from_str(&contents)
            .map_err(|e| ReportError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReportPaths) -> Result<(), ReportError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ReportError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject settings the renderers cannot work with
    pub fn validate(&self) -> Result<(), ReportError> {
        if self.stream.chunk_size == 0 || self.stream.channel_capacity == 0 {
            return Err(ReportError::Config(
                "stream.chunk_size and stream.channel_capacity must be at least 1".into(),
            ));
        }
        if self.page.width_mm < 100.0 || self.page.height_mm < 100.0 {
            return Err(ReportError::Config(format!(
                "page size {}x{}mm is too small",
                self.page.width_mm, self.page.height_mm
            )));
        }
        // Excel limits sheet names to 31 characters
        if self.sheet_name.is_empty() || self.sheet_name.chars().count() > 31 {
            return Err(ReportError::Config(format!(
                "sheet_name '{}' must be 1-31 characters",
                self.sheet_name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = ReportSettings::default();
        assert_eq!(settings.title, "Expense Report by Category");
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.stream.chunk_size, 8192);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = ReportSettings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, ReportSettings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = ReportSettings::default();
        settings.currency_symbol = "EUR ".into();
        settings.stream.channel_capacity = 2;
        settings.save(&paths).unwrap();

        let loaded = ReportSettings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "EUR ");
        assert_eq!(loaded.stream.channel_capacity, 2);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"title": "Household"}"#).unwrap();

        let loaded = ReportSettings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.title, "Household");
        assert_eq!(loaded.sheet_name, "Category Report");
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReportPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"stream": {"chunk_size": 0, "channel_capacity": 4}}"#,
        )
        .unwrap();

        let err = ReportSettings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }
}
