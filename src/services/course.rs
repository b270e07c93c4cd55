//! Course catalog operations

use log::{debug, info};

use super::EnrollmentEngine;
use crate::error::{CcrmError, CcrmResult};
use crate::models::{Course, CourseSpec, InstructorId};
use crate::storage::CourseRef;

impl EnrollmentEngine {
    /// Register a course, using the configured default when `credits` is `None`
    pub fn register_course(
        &mut self,
        code: &str,
        title: &str,
        credits: Option<u32>,
    ) -> CcrmResult<Course> {
        let spec = CourseSpec::new(code, title)
            .credits(credits.unwrap_or(self.settings.default_credits));
        self.register_course_spec(spec)
    }

    /// Register a course from a full spec
    ///
    /// Codes are unique ignoring case. An instructor named in the spec must
    /// already be registered.
    pub fn register_course_spec(&mut self, spec: CourseSpec) -> CcrmResult<Course> {
        let course = spec.build()?;

        if self.store.course_by_code(course.code().as_str()).is_some() {
            return Err(CcrmError::Duplicate {
                entity_type: "Course",
                identifier: course.code().to_string(),
            });
        }

        if let Some(instructor) = course.instructor() {
            if self.store.instructor(instructor).is_none() {
                return Err(CcrmError::instructor_not_found(instructor.to_string()));
            }
        }

        info!(
            "Registered course {} '{}' ({} credits)",
            course.code(),
            course.title(),
            course.credits()
        );
        self.store.push_course(course.clone());
        Ok(course)
    }

    pub fn course(&self, course_ref: &CourseRef) -> Option<&Course> {
        self.store.course(course_ref)
    }

    /// Assign an instructor to a course
    ///
    /// Returns false, changing nothing, when either side does not resolve.
    /// Reassignment replaces the previous instructor.
    pub fn assign_instructor(&mut self, instructor: InstructorId, course_ref: &CourseRef) -> bool {
        if self.store.instructor(instructor).is_none() {
            debug!("Cannot assign unknown instructor {}", instructor);
            return false;
        }

        let Some(idx) = self.store.course_index(course_ref) else {
            debug!("Cannot assign instructor to unknown course {}", course_ref);
            return false;
        };

        match self.store.course_mut(idx) {
            Some(course) => {
                course.set_instructor(instructor);
                info!("Assigned instructor {} to {}", instructor, course.code());
                true
            }
            None => false,
        }
    }

    /// Courses matching an arbitrary predicate, in listing order
    pub fn search_courses<P>(&self, predicate: P) -> Vec<&Course>
    where
        P: Fn(&Course) -> bool,
    {
        self.store.courses().iter().filter(|c| predicate(c)).collect()
    }

    /// Courses whose code starts with `prefix`, ignoring case
    pub fn search_courses_by_code(&self, prefix: &str) -> Vec<&Course> {
        let prefix = prefix.trim().to_uppercase();
        self.search_courses(|c| c.code().as_str().to_uppercase().starts_with(&prefix))
    }

    /// Courses taught by an instructor
    pub fn courses_taught_by(&self, instructor: InstructorId) -> Vec<&Course> {
        self.search_courses(|c| c.instructor() == Some(instructor))
    }
}
