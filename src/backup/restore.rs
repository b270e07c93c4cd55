//! Snapshot restoration
//!
//! Copies a snapshot back over the data directory.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use log::info;

use crate::config::paths::CcrmPaths;
use crate::error::{CcrmError, CcrmResult};

use super::manager::{mirror, parse_snapshot_name, size_of};

/// The record files a complete snapshot holds
const ENTITY_FILES: [&str; 5] = [
    "students.csv",
    "instructors.csv",
    "courses.csv",
    "course_details.json",
    "enrollments.csv",
];

/// Handles restoring from snapshots
pub struct RestoreManager {
    paths: CcrmPaths,
}

impl RestoreManager {
    pub fn new(paths: CcrmPaths) -> Self {
        Self { paths }
    }

    /// Replace the data directory's contents with a snapshot
    ///
    /// Interchange files missing from the snapshot are removed so the
    /// restored data matches the snapshot exactly. It's recommended to take
    /// a backup before restoring.
    pub fn restore_from_snapshot(&self, snapshot: &Path) -> CcrmResult<RestoreResult> {
        let validation = self.validate_snapshot(snapshot)?;
        self.paths.ensure_directories()?;
        let data_dir = self.paths.data_dir();

        let files_restored = restore(snapshot, &data_dir)?;

        for name in ENTITY_FILES {
            let stale = data_dir.join(name);
            if !snapshot.join(name).exists() && stale.exists() {
                fs::remove_file(&stale).map_err(|e| {
                    CcrmError::Io(format!("Failed to remove {}: {}", stale.display(), e))
                })?;
            }
        }

        Ok(RestoreResult {
            snapshot_date: validation.snapshot_date,
            files_restored,
            bytes_restored: validation.size_bytes,
        })
    }

    /// Inspect a snapshot without restoring it
    pub fn validate_snapshot(&self, snapshot: &Path) -> CcrmResult<ValidationResult> {
        if !snapshot.is_dir() {
            return Err(CcrmError::Io(format!(
                "{} is not a backup directory",
                snapshot.display()
            )));
        }

        let snapshot_date = snapshot
            .file_name()
            .and_then(|n| parse_snapshot_name(&n.to_string_lossy()));

        Ok(ValidationResult {
            snapshot_date,
            size_bytes: size_of(snapshot)?,
            has_students: snapshot.join("students.csv").is_file(),
            has_instructors: snapshot.join("instructors.csv").is_file(),
            has_courses: snapshot.join("courses.csv").is_file(),
            has_enrollments: snapshot.join("enrollments.csv").is_file(),
        })
    }
}

/// Mirror `snapshot` into `data_dir`, overwriting files at the same path
///
/// Returns the number of files copied.
pub fn restore(snapshot: &Path, data_dir: &Path) -> CcrmResult<usize> {
    if !snapshot.is_dir() {
        return Err(CcrmError::Io(format!(
            "{} is not a backup directory",
            snapshot.display()
        )));
    }
    let copied = mirror(snapshot, data_dir)?;
    info!(
        "Restored {} file(s) from {} into {}",
        copied,
        snapshot.display(),
        data_dir.display()
    );
    Ok(copied)
}

/// Result of a restore operation
#[derive(Debug)]
pub struct RestoreResult {
    /// When the snapshot was taken, if its name carries a timestamp
    pub snapshot_date: Option<NaiveDateTime>,
    pub files_restored: usize,
    pub bytes_restored: u64,
}

impl RestoreResult {
    pub fn summary(&self) -> String {
        match self.snapshot_date {
            Some(date) => format!(
                "Restored {} file(s), {} bytes, from the snapshot taken {}",
                self.files_restored,
                self.bytes_restored,
                date.format("%Y-%m-%d %H:%M:%S")
            ),
            None => format!(
                "Restored {} file(s), {} bytes",
                self.files_restored, self.bytes_restored
            ),
        }
    }
}

/// Result of validating a snapshot
#[derive(Debug)]
pub struct ValidationResult {
    pub snapshot_date: Option<NaiveDateTime>,
    pub size_bytes: u64,
    pub has_students: bool,
    pub has_instructors: bool,
    pub has_courses: bool,
    pub has_enrollments: bool,
}

impl ValidationResult {
    /// Check if all expected data is present
    pub fn is_complete(&self) -> bool {
        self.has_students && self.has_instructors && self.has_courses && self.has_enrollments
    }

    /// Get a summary of what data is missing
    pub fn summary(&self) -> String {
        let missing: Vec<&str> = [
            (self.has_students, "students"),
            (self.has_instructors, "instructors"),
            (self.has_courses, "courses"),
            (self.has_enrollments, "enrollments"),
        ]
        .iter()
        .filter(|(present, _)| !present)
        .map(|(_, name)| *name)
        .collect();

        if missing.is_empty() {
            "Complete backup".to_string()
        } else {
            format!("Missing: {}", missing.join(", "))
        }
    }
}
