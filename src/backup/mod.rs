//! Backup system for CCRM
//!
//! Snapshots the data directory into timestamped sibling directories and
//! restores from them.
//!
//! # Architecture
//!
//! - `BackupManager`: creates, lists and prunes snapshots
//! - `RestoreManager`: validates and restores snapshots
//!
//! The free functions [`backup`] and [`size_of`] work on any directory and
//! know nothing about the entity files inside it.
//!
//! # Snapshot Format
//!
//! A snapshot is a recursive copy of the source directory, named
//! `backup_YYYYMMDD_HHMMSS` after the local time it was taken. Two snapshots
//! taken within the same second share a directory; the later one overwrites
//! files of the same relative path.
//!
//! # Example
//!
//! ```rust,ignore
//! use ccrm::backup::{BackupManager, RestoreManager};
//! use ccrm::config::CcrmPaths;
//!
//! let paths = CcrmPaths::new()?;
//! let manager = BackupManager::new(&paths, 10);
//! let (snapshot, _pruned) = manager.create_backup_with_retention()?;
//!
//! if let Some(snapshot) = snapshot {
//!     let result = RestoreManager::new(paths).restore_from_snapshot(&snapshot)?;
//!     println!("{}", result.summary());
//! }
//! ```

mod manager;
mod restore;

pub use manager::{
    backup, enforce_retention, list_snapshots, size_of, BackupInfo, BackupManager,
    SNAPSHOT_PREFIX, TIMESTAMP_FORMAT,
};
pub use restore::{restore, RestoreManager, RestoreResult, ValidationResult};
