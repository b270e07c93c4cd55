//! Enrollment model
//!
//! An enrollment binds a student to a course for one semester. Its identity is
//! the (student, course, semester) triple; the grade is the only field that
//! changes after creation.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use super::course::CourseCode;
use super::grade::Grade;
use super::ids::StudentId;
use super::semester::Semester;

/// Natural key of an enrollment
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EnrollmentKey {
    pub student: StudentId,
    pub course: CourseCode,
    pub semester: Semester,
}

impl EnrollmentKey {
    pub fn new(student: StudentId, course: CourseCode, semester: Semester) -> Self {
        Self {
            student,
            course,
            semester,
        }
    }

    /// Same student and semester, with the course code compared ignoring case
    pub fn matches(&self, other: &EnrollmentKey) -> bool {
        self.student == other.student
            && self.semester == other.semester
            && self.course.matches(other.course.as_str())
    }
}

impl fmt::Display for EnrollmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "student {} / {} / {}", self.student, self.course, self.semester)
    }
}

/// A student's enrollment in a course for a semester
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    #[serde(flatten)]
    key: EnrollmentKey,
    enrolled_on: NaiveDate,
    #[serde(default)]
    grade: Option<Grade>,
}

impl Enrollment {
    /// Create an ungraded enrollment stamped with today's date
    pub fn new(student: StudentId, course: CourseCode, semester: Semester) -> Self {
        Self {
            key: EnrollmentKey::new(student, course, semester),
            enrolled_on: Local::now().date_naive(),
            grade: None,
        }
    }

    pub fn key(&self) -> &EnrollmentKey {
        &self.key
    }

    pub fn student(&self) -> StudentId {
        self.key.student
    }

    pub fn course(&self) -> &CourseCode {
        &self.key.course
    }

    pub fn semester(&self) -> Semester {
        self.key.semester
    }

    pub fn enrolled_on(&self) -> NaiveDate {
        self.enrolled_on
    }

    pub fn grade(&self) -> Option<Grade> {
        self.grade
    }

    pub fn is_graded(&self) -> bool {
        self.grade.is_some()
    }

    /// Record a grade, replacing any earlier one
    pub(crate) fn set_grade(&mut self, grade: Grade) {
        self.grade = Some(grade);
    }

    /// Whether this enrollment belongs to the given student and semester
    pub fn counts_toward(&self, student: StudentId, semester: Semester) -> bool {
        self.key.student == student && self.key.semester == semester
    }
}

impl PartialEq for Enrollment {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Enrollment {}

impl Hash for Enrollment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grade = self
            .grade
            .map(|g| g.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        write!(f, "{} - Grade: {}", self.key, grade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Enrollment {
        Enrollment::new(
            StudentId::first(),
            CourseCode::new("CS101").unwrap(),
            Semester::Fall,
        )
    }

    #[test]
    fn test_new_enrollment_is_ungraded() {
        let e = sample();
        assert!(!e.is_graded());
        assert_eq!(e.enrolled_on(), Local::now().date_naive());
    }

    #[test]
    fn test_equality_ignores_grade() {
        let a = sample();
        let mut b = sample();
        b.set_grade(Grade::A);
        assert_eq!(a, b);

        let c = Enrollment::new(
            StudentId::first(),
            CourseCode::new("CS101").unwrap(),
            Semester::Spring,
        );
        assert_ne!(a, c);
    }

    #[test]
    fn test_key_matches_ignores_code_case() {
        let stored = sample();
        let typed = EnrollmentKey::new(
            StudentId::first(),
            CourseCode::new("cs101").unwrap(),
            Semester::Fall,
        );
        assert!(stored.key().matches(&typed));
        assert_ne!(stored.key(), &typed);

        let other_term = EnrollmentKey::new(
            StudentId::first(),
            CourseCode::new("cs101").unwrap(),
            Semester::Spring,
        );
        assert!(!stored.key().matches(&other_term));
    }

    #[test]
    fn test_regrade_replaces() {
        let mut e = sample();
        e.set_grade(Grade::B);
        e.set_grade(Grade::S);
        assert_eq!(e.grade(), Some(Grade::S));
    }

    #[test]
    fn test_counts_toward() {
        let e = sample();
        assert!(e.counts_toward(StudentId::first(), Semester::Fall));
        assert!(!e.counts_toward(StudentId::first(), Semester::Summer));
        assert!(!e.counts_toward(StudentId::first().next().unwrap(), Semester::Fall));
    }
}
