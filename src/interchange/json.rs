//! JSON export
//!
//! Exports the complete record set to JSON with schema versioning, for
//! consumers that want the fields the flat files leave out (creation dates,
//! active flags, instructor assignments, department and semester tags).
//!
//! The same course fields are kept between sessions in a small details file
//! next to courses.csv, keyed by course code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{CcrmError, CcrmResult};
use crate::models::course::UNSET_DEPARTMENT;
use crate::models::{
    Course, CourseCode, Enrollment, Instructor, InstructorId, Semester, Student,
};
use crate::storage::RecordStore;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full record set export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: String,
    pub students: Vec<Student>,
    pub instructors: Vec<Instructor>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub student_count: usize,
    pub instructor_count: usize,
    pub course_count: usize,
    pub enrollment_count: usize,
    pub graded_count: usize,
}

impl FullExport {
    /// Snapshot the store
    pub fn from_store(store: &RecordStore) -> Self {
        let metadata = ExportMetadata {
            student_count: store.students().len(),
            instructor_count: store.instructors().len(),
            course_count: store.courses().len(),
            enrollment_count: store.enrollments().len(),
            graded_count: store.enrollments().iter().filter(|e| e.is_graded()).count(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            students: store.students().to_vec(),
            instructors: store.instructors().to_vec(),
            courses: store.courses().to_vec(),
            enrollments: store.enrollments().to_vec(),
            metadata,
        }
    }
}

/// Course fields that courses.csv has no columns for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDetails {
    pub code: CourseCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<InstructorId>,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<Semester>,
}

impl CourseDetails {
    /// The course's extra fields, or None when they all hold their defaults
    pub fn from_course(course: &Course) -> Option<Self> {
        if course.instructor().is_none()
            && course.semester().is_none()
            && course.department() == UNSET_DEPARTMENT
        {
            return None;
        }
        Some(Self {
            code: course.code().clone(),
            instructor: course.instructor(),
            department: course.department().to_string(),
            semester: course.semester(),
        })
    }
}

/// Collect the details of every course that has any
pub fn course_details(store: &RecordStore) -> Vec<CourseDetails> {
    store
        .courses()
        .iter()
        .filter_map(CourseDetails::from_course)
        .collect()
}

/// Export the full record set as pretty-printed JSON
pub fn export_full_json<W: Write>(store: &RecordStore, writer: W) -> CcrmResult<()> {
    let export = FullExport::from_store(store);
    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| CcrmError::Json(format!("Failed to serialize export: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::Semester;
    use crate::services::EnrollmentEngine;

    #[test]
    fn test_export_full_json() {
        let mut engine = EnrollmentEngine::new(Settings::default());
        let ann = engine.register_student("Ann Lee").unwrap();
        engine.register_course("CS101", "Intro", Some(4)).unwrap();
        engine.enroll(ann.id(), &"CS101".into(), Semester::Fall).unwrap();

        let mut output = Vec::new();
        export_full_json(engine.store(), &mut output).unwrap();

        let export: FullExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.metadata.student_count, 1);
        assert_eq!(export.metadata.enrollment_count, 1);
        assert_eq!(export.metadata.graded_count, 0);
        assert_eq!(export.students[0].email(), "annlee@mail.com");
    }

    #[test]
    fn test_course_details_skip_plain_courses() {
        let mut engine = EnrollmentEngine::new(Settings::default());
        let raj = engine.register_instructor("Raj Patel", "Physics").unwrap();
        engine.register_course("CS101", "Intro", Some(4)).unwrap();
        engine.register_course("PH101", "Mechanics", None).unwrap();
        engine.assign_instructor(raj.id(), &"PH101".into());

        let details = course_details(engine.store());
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].code.as_str(), "PH101");
        assert_eq!(details[0].instructor, Some(raj.id()));
        assert_eq!(details[0].department, "N/A");
    }
}
