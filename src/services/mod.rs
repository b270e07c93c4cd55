//! Service layer for CCRM
//!
//! The [`EnrollmentEngine`] owns the session's [`RecordStore`] and applies the
//! business rules on top of it: registration, enrollment limits, grading,
//! transcripts and GPA. Its operations are grouped by concern:
//!
//! - `people`: student and instructor registration
//! - `course`: course registration, instructor assignment, search
//! - `enrollment`: enroll, grade recording, semester credit totals
//! - `transcript`: transcript assembly and GPA
//! - `persistence`: loading and saving the interchange files
//!
//! Every mutation takes `&mut self`, so the check-then-commit sequence in
//! `enroll` is one exclusive borrow. A concurrent host must put the engine
//! behind a mutex to keep that guarantee.

pub mod course;
pub mod enrollment;
pub mod people;
pub mod persistence;
pub mod transcript;

pub use transcript::{TranscriptReport, TranscriptRow};

use crate::config::Settings;
use crate::models::{Course, Enrollment, Instructor, Student};
use crate::storage::RecordStore;

/// Business-rule layer over the record store
#[derive(Debug, Clone)]
pub struct EnrollmentEngine {
    store: RecordStore,
    settings: Settings,
}

impl EnrollmentEngine {
    /// Create an engine over an empty store
    pub fn new(settings: Settings) -> Self {
        Self::with_store(settings, RecordStore::new())
    }

    /// Create an engine over an existing store
    pub fn with_store(settings: Settings, store: RecordStore) -> Self {
        Self { store, settings }
    }

    /// Read-only view of the collections
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn students(&self) -> &[Student] {
        self.store.students()
    }

    pub fn instructors(&self) -> &[Instructor] {
        self.store.instructors()
    }

    pub fn courses(&self) -> &[Course] {
        self.store.courses()
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        self.store.enrollments()
    }
}
