//! Enrollment and grading
//!
//! `enroll` runs its checks in a fixed order (resolution, duplicate key,
//! credit ceiling) and only appends once all of them pass, so a rejected
//! call leaves the store untouched.

use log::{debug, info};

use super::EnrollmentEngine;
use crate::error::{CcrmError, CcrmResult};
use crate::models::{Enrollment, EnrollmentKey, Grade, Semester, StudentId};
use crate::storage::{CourseRef, EnrollmentRef};

impl EnrollmentEngine {
    /// Enroll a student in a course for a semester
    pub fn enroll(
        &mut self,
        student_id: StudentId,
        course_ref: &CourseRef,
        semester: Semester,
    ) -> CcrmResult<Enrollment> {
        let student = self.store.student(student_id).ok_or_else(|| {
            CcrmError::InvalidArgument(format!("Unknown student ID {}", student_id))
        })?;
        let course = self.store.course(course_ref).ok_or_else(|| {
            CcrmError::InvalidArgument(format!("Unknown course {}", course_ref))
        })?;

        let key = EnrollmentKey::new(student_id, course.code().clone(), semester);
        if self.store.contains_enrollment(&key) {
            return Err(CcrmError::DuplicateEnrollment {
                student: student.full_name().to_string(),
                course: course.code().to_string(),
                semester: semester.to_string(),
            });
        }

        let current = self.semester_credits(student_id, semester);
        let requested = course.credits();
        let limit = self.settings.max_credits_per_semester;
        if current + requested > limit {
            return Err(CcrmError::CreditLimitExceeded {
                student: student.full_name().to_string(),
                semester: semester.to_string(),
                current,
                requested,
                limit,
            });
        }

        let enrollment = Enrollment::new(key.student, key.course, key.semester);
        if let Some(student) = self.store.student_mut(student_id) {
            student.record_course(enrollment.course());
        }
        self.store.push_enrollment(enrollment.clone());

        info!(
            "Enrolled student {} in {} for {} ({} of {} credits)",
            student_id,
            enrollment.course(),
            semester,
            current + requested,
            limit
        );
        Ok(enrollment)
    }

    /// Credits a student already carries in a semester
    pub fn semester_credits(&self, student_id: StudentId, semester: Semester) -> u32 {
        self.store
            .enrollments()
            .iter()
            .filter(|e| e.counts_toward(student_id, semester))
            .filter_map(|e| self.store.course_by_code(e.course().as_str()))
            .map(|c| c.credits())
            .sum()
    }

    /// Record or replace the grade on an enrollment
    ///
    /// Returns false when the reference does not resolve.
    pub fn record_grade(&mut self, enrollment_ref: &EnrollmentRef, grade: Grade) -> bool {
        let Some(idx) = self.store.enrollment_index(enrollment_ref) else {
            debug!("No enrollment matches {:?}", enrollment_ref);
            return false;
        };

        match self.store.enrollment_mut(idx) {
            Some(enrollment) => {
                enrollment.set_grade(grade);
                info!("Recorded grade {} for {}", grade, enrollment.key());
                true
            }
            None => false,
        }
    }

    /// Record a grade given by name, such as `"A"` or `"f"`
    ///
    /// Returns false when the name is not a grade or the reference does not
    /// resolve.
    pub fn record_grade_named(&mut self, enrollment_ref: &EnrollmentRef, grade: &str) -> bool {
        match grade.parse::<Grade>() {
            Ok(grade) => self.record_grade(enrollment_ref, grade),
            Err(e) => {
                debug!("{}", e);
                false
            }
        }
    }

    /// Enrollments for one student, in listing order
    pub fn enrollments_for(&self, student_id: StudentId) -> Vec<&Enrollment> {
        self.store
            .enrollments()
            .iter()
            .filter(|e| e.student() == student_id)
            .collect()
    }
}
