//! Student and instructor registration
//!
//! Emails are derived from the full name and must be unique within each
//! role's collection. IDs are one past the largest in use.

use log::{debug, info};

use super::EnrollmentEngine;
use crate::error::{CcrmError, CcrmResult};
use crate::models::{derive_email, Instructor, InstructorId, Student, StudentId};

impl EnrollmentEngine {
    /// Register a new student
    pub fn register_student(&mut self, name: &str) -> CcrmResult<Student> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CcrmError::InvalidArgument(
                "Student name cannot be blank".into(),
            ));
        }

        let email = derive_email(name, &self.settings.email_domain);
        if self.store.student_email_taken(&email) {
            return Err(CcrmError::Duplicate {
                entity_type: "Student",
                identifier: email,
            });
        }

        let student = Student::new(self.store.next_student_id()?, name, &email)?;
        info!("Registered student {} ({})", student.id(), student.email());
        self.store.push_student(student.clone());
        Ok(student)
    }

    /// Register a new instructor
    pub fn register_instructor(&mut self, name: &str, department: &str) -> CcrmResult<Instructor> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CcrmError::InvalidArgument(
                "Instructor name cannot be blank".into(),
            ));
        }
        if department.trim().is_empty() {
            return Err(CcrmError::InvalidArgument(
                "Instructor department cannot be blank".into(),
            ));
        }

        let email = derive_email(name, &self.settings.email_domain);
        if self.store.instructor_email_taken(&email) {
            return Err(CcrmError::Duplicate {
                entity_type: "Instructor",
                identifier: email,
            });
        }

        let instructor =
            Instructor::new(self.store.next_instructor_id()?, name, &email, department)?;
        info!(
            "Registered instructor {} ({}, {})",
            instructor.id(),
            instructor.email(),
            instructor.department()
        );
        self.store.push_instructor(instructor.clone());
        Ok(instructor)
    }

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.store.student(id)
    }

    pub fn instructor(&self, id: InstructorId) -> Option<&Instructor> {
        self.store.instructor(id)
    }

    /// Mark a student inactive. Returns false if the ID is unknown.
    ///
    /// Inactive students keep their records and may still enroll.
    pub fn deactivate_student(&mut self, id: StudentId) -> bool {
        match self.store.student_mut(id) {
            Some(student) => {
                student.deactivate();
                debug!("Deactivated student {}", id);
                true
            }
            None => false,
        }
    }

    /// Mark an instructor inactive. Returns false if the ID is unknown.
    pub fn deactivate_instructor(&mut self, id: InstructorId) -> bool {
        match self.store.instructor_mut(id) {
            Some(instructor) => {
                instructor.deactivate();
                debug!("Deactivated instructor {}", id);
                true
            }
            None => false,
        }
    }
}
