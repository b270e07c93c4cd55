//! User settings for CCRM
//!
//! Holds the business-rule knobs the engine is constructed with (credit
//! ceiling, email domain, default course credits) and the snapshot retention
//! policy. Settings are an explicit value handed to the engine, never global.

use serde::{Deserialize, Serialize};

use super::paths::CcrmPaths;
use crate::error::CcrmError;

/// User settings for CCRM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Maximum total credits a student may carry within one semester
    #[serde(default = "default_max_credits")]
    pub max_credits_per_semester: u32,

    /// Domain appended to derived email addresses
    #[serde(default = "default_email_domain")]
    pub email_domain: String,

    /// Credits given to a course when none are specified
    #[serde(default = "default_credits")]
    pub default_credits: u32,

    /// Number of data snapshots to keep
    #[serde(default = "default_backup_retention")]
    pub backup_retention: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_max_credits() -> u32 {
    21
}

fn default_email_domain() -> String {
    "mail.com".to_string()
}

fn default_credits() -> u32 {
    3
}

fn default_backup_retention() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            max_credits_per_semester: default_max_credits(),
            email_domain: default_email_domain(),
            default_credits: default_credits(),
            backup_retention: default_backup_retention(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CcrmPaths) -> Result<Self, CcrmError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| CcrmError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CcrmError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CcrmPaths) -> Result<(), CcrmError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CcrmError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| CcrmError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject settings that would make every enrollment or registration fail
    pub fn validate(&self) -> Result<(), CcrmError> {
        if self.max_credits_per_semester == 0 {
            return Err(CcrmError::Config(
                "max_credits_per_semester must be positive".into(),
            ));
        }
        if self.email_domain.trim().is_empty() {
            return Err(CcrmError::Config("email_domain cannot be empty".into()));
        }
        if !(1..=6).contains(&self.default_credits) {
            return Err(CcrmError::Config(format!(
                "default_credits must be between 1 and 6, got {}",
                self.default_credits
            )));
        }
        Ok(())
    }
}
