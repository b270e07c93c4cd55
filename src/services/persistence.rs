//! Bulk load and save of the interchange files
//!
//! Loading merges into whatever the store already holds. A decoded record
//! whose natural key is already present is skipped with a warning, the same
//! way a malformed line is. Enrollments must be loaded after the students
//! and courses they refer to.

use std::io::Write;
use std::path::Path;

use log::{info, warn};

use super::EnrollmentEngine;
use crate::error::CcrmResult;
use crate::interchange::json::CourseDetails;
use crate::interchange::{
    courses, enrollments, instructors, json, students, ImportReport, Parsed,
};
use crate::models::{Course, Enrollment, Instructor, Student};
use crate::storage::file_io::{read_json, write_json_atomic, WriteMode};
use crate::storage::CourseRef;

impl EnrollmentEngine {
    pub fn import_students(&mut self, path: &Path) -> CcrmResult<ImportReport> {
        let parsed = students::import_students(path)?;
        Ok(self.load_students(parsed))
    }

    pub fn import_instructors(&mut self, path: &Path) -> CcrmResult<ImportReport> {
        let parsed = instructors::import_instructors(path)?;
        Ok(self.load_instructors(parsed))
    }

    pub fn import_courses(&mut self, path: &Path) -> CcrmResult<ImportReport> {
        let parsed = courses::import_courses(path)?;
        Ok(self.load_courses(parsed))
    }

    pub fn import_enrollments(&mut self, path: &Path) -> CcrmResult<ImportReport> {
        let parsed = enrollments::import_enrollments(path, &self.store)?;
        Ok(self.load_enrollments(parsed))
    }

    /// Merge decoded students into the store
    pub fn load_students(&mut self, parsed: Parsed<Student>) -> ImportReport {
        let mut report = parsed.report;
        for (line, student) in parsed.records {
            if self.store.student(student.id()).is_some() {
                report.skip(line, format!("duplicate student ID {}", student.id()));
            } else if self.store.student_email_taken(student.email()) {
                report.skip(line, format!("duplicate email {}", student.email()));
            } else {
                self.store.push_student(student);
                report.loaded += 1;
            }
        }
        info!("{}", report.summary());
        report
    }

    /// Merge decoded instructors into the store
    pub fn load_instructors(&mut self, parsed: Parsed<Instructor>) -> ImportReport {
        let mut report = parsed.report;
        for (line, instructor) in parsed.records {
            if self.store.instructor(instructor.id()).is_some() {
                report.skip(line, format!("duplicate instructor ID {}", instructor.id()));
            } else if self.store.instructor_email_taken(instructor.email()) {
                report.skip(line, format!("duplicate email {}", instructor.email()));
            } else {
                self.store.push_instructor(instructor);
                report.loaded += 1;
            }
        }
        info!("{}", report.summary());
        report
    }

    /// Merge decoded courses into the store
    pub fn load_courses(&mut self, parsed: Parsed<Course>) -> ImportReport {
        let mut report = parsed.report;
        for (line, course) in parsed.records {
            if self.store.course_by_code(course.code().as_str()).is_some() {
                report.skip(line, format!("duplicate course code {}", course.code()));
            } else {
                self.store.push_course(course);
                report.loaded += 1;
            }
        }
        info!("{}", report.summary());
        report
    }

    /// Merge decoded enrollments into the store
    ///
    /// The credit ceiling is not re-checked: the file is taken as the
    /// record of what was admitted.
    pub fn load_enrollments(&mut self, parsed: Parsed<Enrollment>) -> ImportReport {
        let mut report = parsed.report;
        for (line, enrollment) in parsed.records {
            if self.store.contains_enrollment(enrollment.key()) {
                report.skip(line, format!("duplicate enrollment {}", enrollment.key()));
                continue;
            }
            if let Some(student) = self.store.student_mut(enrollment.student()) {
                student.record_course(enrollment.course());
            }
            self.store.push_enrollment(enrollment);
            report.loaded += 1;
        }
        info!("{}", report.summary());
        report
    }

    pub fn export_students(&self, path: &Path, mode: WriteMode) -> CcrmResult<()> {
        students::export_students(path, self.store.students(), mode)
    }

    pub fn export_instructors(&self, path: &Path, mode: WriteMode) -> CcrmResult<()> {
        instructors::export_instructors(path, self.store.instructors(), mode)
    }

    pub fn export_courses(&self, path: &Path, mode: WriteMode) -> CcrmResult<()> {
        courses::export_courses(path, self.store.courses(), mode)
    }

    pub fn export_enrollments(&self, path: &Path, mode: WriteMode) -> CcrmResult<()> {
        enrollments::export_enrollments(path, self.store.enrollments(), mode)
    }

    /// Write the course details file; always a full overwrite
    pub fn export_course_details(&self, path: &Path) -> CcrmResult<()> {
        write_json_atomic(path, &json::course_details(&self.store))
    }

    /// Re-apply saved course details to the loaded courses
    ///
    /// A missing file applies nothing. Returns the number of courses updated.
    pub fn import_course_details(&mut self, path: &Path) -> CcrmResult<usize> {
        let details: Vec<CourseDetails> = read_json(path)?;
        Ok(self.load_course_details(details))
    }

    /// Entries naming an unknown course code are skipped with a warning
    pub fn load_course_details(&mut self, details: Vec<CourseDetails>) -> usize {
        let mut applied = 0;
        for detail in details {
            let course_ref = CourseRef::Code(detail.code.as_str().to_string());
            let course = match self.store.course_index(&course_ref) {
                Some(idx) => self.store.course_mut(idx),
                None => None,
            };
            match course {
                Some(course) => {
                    course.restore_details(detail.instructor, &detail.department, detail.semester);
                    applied += 1;
                }
                None => warn!("Skipping details for unknown course {}", detail.code),
            }
        }
        applied
    }

    /// Write the full record set as JSON
    pub fn export_json<W: Write>(&self, writer: W) -> CcrmResult<()> {
        json::export_full_json(&self.store, writer)
    }
}
