//! Configuration module for CCRM
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Settings persistence (credit ceiling, email domain, retention)

pub mod paths;
pub mod settings;

pub use paths::CcrmPaths;
pub use settings::Settings;
