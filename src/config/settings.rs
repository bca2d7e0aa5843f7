//! User settings for budget-tracker
//!
//! Stored as `config.json` next to the budget document. Every field has a
//! serde default so older or hand-edited files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::status::DEFAULT_WARNING_THRESHOLD;

/// User settings for budget-tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Spend ratio at which a category turns to "warning"
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: f64,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_warning_threshold() -> f64 {
    DEFAULT_WARNING_THRESHOLD
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            warning_threshold: default_warning_threshold(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// The warning threshold to apply, falling back to the default when the
    /// configured value is outside `(0, 1]`
    pub fn effective_warning_threshold(&self) -> f64 {
        if self.warning_threshold > 0.0 && self.warning_threshold <= 1.0 {
            self.warning_threshold
        } else {
            DEFAULT_WARNING_THRESHOLD
        }
    }

    /// Load settings from disk, or default settings if the file doesn't exist
    ///
    /// Nothing is written here; the `config` command writes the file.
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.warning_threshold, 0.8);
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".to_string(),
            warning_threshold: 0.9,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.warning_threshold, 0.9);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "£"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.warning_threshold, 0.8);
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_out_of_range_threshold_falls_back() {
        let mut settings = Settings::default();

        settings.warning_threshold = 0.0;
        assert_eq!(settings.effective_warning_threshold(), 0.8);

        settings.warning_threshold = 1.5;
        assert_eq!(settings.effective_warning_threshold(), 0.8);

        settings.warning_threshold = 0.75;
        assert_eq!(settings.effective_warning_threshold(), 0.75);
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, BudgetError::Config(_)));
    }
}
