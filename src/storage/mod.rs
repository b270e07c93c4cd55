//! Storage layer for CCRM
//!
//! Holds the in-memory record store and flushes it to the interchange files
//! under the data directory, writing each file atomically.

pub mod file_io;
pub mod records;

pub use file_io::{write_atomic, WriteMode};
pub use records::{CourseRef, EnrollmentRef, RecordStore};

use std::path::Path;

use log::debug;

use crate::config::paths::CcrmPaths;
use crate::error::CcrmError;
use crate::interchange::ImportReport;
use crate::services::EnrollmentEngine;

/// Main storage coordinator that moves records between disk and the engine
pub struct Storage {
    paths: CcrmPaths,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: CcrmPaths) -> Result<Self, CcrmError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self { paths })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &CcrmPaths {
        &self.paths
    }

    /// Load every interchange file that exists into `engine`
    ///
    /// Files load in dependency order so enrollments can resolve their
    /// students and courses. A missing file counts as an empty collection.
    /// Course details are applied once the courses they belong to are loaded.
    pub fn load_all(&self, engine: &mut EnrollmentEngine) -> Result<Vec<ImportReport>, CcrmError> {
        let mut reports = Vec::new();

        let students = self.paths.students_file();
        if exists(&students) {
            reports.push(engine.import_students(&students)?);
        }

        let instructors = self.paths.instructors_file();
        if exists(&instructors) {
            reports.push(engine.import_instructors(&instructors)?);
        }

        let courses = self.paths.courses_file();
        if exists(&courses) {
            reports.push(engine.import_courses(&courses)?);
            let applied = engine.import_course_details(&self.paths.course_details_file())?;
            debug!("Applied details to {} course(s)", applied);
        }

        let enrollments = self.paths.enrollments_file();
        if exists(&enrollments) {
            reports.push(engine.import_enrollments(&enrollments)?);
        }

        Ok(reports)
    }

    /// Save all data to disk, replacing the previous files
    pub fn save_all(&self, engine: &EnrollmentEngine) -> Result<(), CcrmError> {
        engine.export_students(&self.paths.students_file(), WriteMode::Overwrite)?;
        engine.export_instructors(&self.paths.instructors_file(), WriteMode::Overwrite)?;
        engine.export_courses(&self.paths.courses_file(), WriteMode::Overwrite)?;
        engine.export_course_details(&self.paths.course_details_file())?;
        engine.export_enrollments(&self.paths.enrollments_file(), WriteMode::Overwrite)?;
        Ok(())
    }

    /// Check if storage has been initialized (has any data)
    pub fn is_initialized(&self) -> bool {
        [
            self.paths.students_file(),
            self.paths.instructors_file(),
            self.paths.courses_file(),
            self.paths.enrollments_file(),
        ]
        .iter()
        .any(|p| p.exists())
    }
}

fn exists(path: &Path) -> bool {
    let found = path.exists();
    if !found {
        debug!("{} not present, starting empty", path.display());
    }
    found
}
