//! Path management for CCRM
//!
//! Provides XDG-compliant path resolution for configuration, data, and backups.
//!
//! ## Path Resolution Order
//!
//! 1. `CCRM_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/ccrm` or `~/.config/ccrm`
//! 3. Windows: `%APPDATA%\ccrm`
//!
//! Only the CLI resolves paths from the environment; the engine and codec take
//! every location as an explicit parameter.

use std::path::PathBuf;

use crate::error::CcrmError;

/// Manages all paths used by CCRM
#[derive(Debug, Clone)]
pub struct CcrmPaths {
    /// Base directory for all CCRM data
    base_dir: PathBuf,
}

impl CcrmPaths {
    /// Create a new CcrmPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CcrmError> {
        let base_dir = if let Ok(custom) = std::env::var("CCRM_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CcrmPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/ccrm/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/ccrm/data/)
    ///
    /// Snapshots are created next to this directory as `backup_<timestamp>`.
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to students.csv
    pub fn students_file(&self) -> PathBuf {
        self.data_dir().join("students.csv")
    }

    /// Get the path to instructors.csv
    pub fn instructors_file(&self) -> PathBuf {
        self.data_dir().join("instructors.csv")
    }

    /// Get the path to courses.csv
    pub fn courses_file(&self) -> PathBuf {
        self.data_dir().join("courses.csv")
    }

    /// Get the path to enrollments.csv
    pub fn enrollments_file(&self) -> PathBuf {
        self.data_dir().join("enrollments.csv")
    }

    /// Get the path to course_details.json
    ///
    /// Holds the course fields that courses.csv has no columns for.
    pub fn course_details_file(&self) -> PathBuf {
        self.data_dir().join("course_details.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), CcrmError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CcrmError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CcrmError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CcrmError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("ccrm"));
    }
    let home = std::env::var("HOME")
        .map_err(|_| CcrmError::Config("Could not determine HOME directory".into()))?;
    Ok(PathBuf::from(home).join(".config").join("ccrm"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CcrmError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CcrmError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("ccrm"))
}
