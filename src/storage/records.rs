//! In-memory record store
//!
//! Holds the four entity collections in insertion order. Reads are public;
//! every mutation is crate-private so that only the engine can change the
//! collections and invariant checks cannot be bypassed.

use std::fmt;
use std::str::FromStr;

use crate::error::CcrmError;
use crate::models::{
    Course, Enrollment, EnrollmentKey, Instructor, InstructorId, Student, StudentId,
};

/// How a caller refers to a course
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseRef {
    /// 1-based position in the course listing
    Position(usize),
    /// Course code, matched case-insensitively
    Code(String),
}

impl FromStr for CourseRef {
    type Err = CcrmError;

    /// All-digit input is a listing position, anything else a course code
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(CcrmError::InvalidArgument(
                "Course reference cannot be blank".into(),
            ));
        }
        if s.chars().all(|c| c.is_ascii_digit()) {
            let position = s.parse().map_err(|_| {
                CcrmError::InvalidArgument(format!("Invalid course position: '{}'", s))
            })?;
            Ok(Self::Position(position))
        } else {
            Ok(Self::Code(s.to_string()))
        }
    }
}

impl fmt::Display for CourseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position(p) => write!(f, "#{}", p),
            Self::Code(code) => write!(f, "{}", code),
        }
    }
}

impl From<&str> for CourseRef {
    fn from(code: &str) -> Self {
        Self::Code(code.to_string())
    }
}

impl From<usize> for CourseRef {
    fn from(position: usize) -> Self {
        Self::Position(position)
    }
}

/// How a caller refers to an enrollment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentRef {
    /// 1-based position in the enrollment listing
    Position(usize),
    /// The (student, course, semester) natural key
    Key(EnrollmentKey),
}

impl From<usize> for EnrollmentRef {
    fn from(position: usize) -> Self {
        Self::Position(position)
    }
}

impl From<EnrollmentKey> for EnrollmentRef {
    fn from(key: EnrollmentKey) -> Self {
        Self::Key(key)
    }
}

/// The authoritative collections for a session
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    students: Vec<Student>,
    instructors: Vec<Instructor>,
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
            && self.instructors.is_empty()
            && self.courses.is_empty()
            && self.enrollments.is_empty()
    }

    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    pub fn instructor(&self, id: InstructorId) -> Option<&Instructor> {
        self.instructors.iter().find(|i| i.id() == id)
    }

    /// Case-insensitive lookup by course code
    pub fn course_by_code(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code().matches(code))
    }

    pub fn course(&self, course_ref: &CourseRef) -> Option<&Course> {
        self.course_index(course_ref).map(|idx| &self.courses[idx])
    }

    pub fn enrollment(&self, enrollment_ref: &EnrollmentRef) -> Option<&Enrollment> {
        self.enrollment_index(enrollment_ref)
            .map(|idx| &self.enrollments[idx])
    }

    /// Whether the triple is enrolled; course codes compare ignoring case
    pub fn contains_enrollment(&self, key: &EnrollmentKey) -> bool {
        self.enrollments.iter().any(|e| e.key().matches(key))
    }

    pub fn student_email_taken(&self, email: &str) -> bool {
        self.students.iter().any(|s| s.has_email(email))
    }

    pub fn instructor_email_taken(&self, email: &str) -> bool {
        self.instructors.iter().any(|i| i.has_email(email))
    }

    /// Next student ID: one past the largest in use, or 1 when empty
    pub fn next_student_id(&self) -> Result<StudentId, CcrmError> {
        self.students
            .iter()
            .map(|s| s.id())
            .max()
            .map_or_else(|| Ok(StudentId::first()), StudentId::next)
    }

    /// Next instructor ID: one past the largest in use, or 1 when empty
    pub fn next_instructor_id(&self) -> Result<InstructorId, CcrmError> {
        self.instructors
            .iter()
            .map(|i| i.id())
            .max()
            .map_or_else(|| Ok(InstructorId::first()), InstructorId::next)
    }

    pub(crate) fn course_index(&self, course_ref: &CourseRef) -> Option<usize> {
        match course_ref {
            CourseRef::Position(p) if *p >= 1 && *p <= self.courses.len() => Some(p - 1),
            CourseRef::Position(_) => None,
            CourseRef::Code(code) => self.courses.iter().position(|c| c.code().matches(code)),
        }
    }

    pub(crate) fn enrollment_index(&self, enrollment_ref: &EnrollmentRef) -> Option<usize> {
        match enrollment_ref {
            EnrollmentRef::Position(p) if *p >= 1 && *p <= self.enrollments.len() => Some(p - 1),
            EnrollmentRef::Position(_) => None,
            EnrollmentRef::Key(key) => self.enrollments.iter().position(|e| e.key().matches(key)),
        }
    }

    pub(crate) fn student_mut(&mut self, id: StudentId) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.id() == id)
    }

    pub(crate) fn instructor_mut(&mut self, id: InstructorId) -> Option<&mut Instructor> {
        self.instructors.iter_mut().find(|i| i.id() == id)
    }

    pub(crate) fn course_mut(&mut self, idx: usize) -> Option<&mut Course> {
        self.courses.get_mut(idx)
    }

    pub(crate) fn enrollment_mut(&mut self, idx: usize) -> Option<&mut Enrollment> {
        self.enrollments.get_mut(idx)
    }

    pub(crate) fn push_student(&mut self, student: Student) {
        self.students.push(student);
    }

    pub(crate) fn push_instructor(&mut self, instructor: Instructor) {
        self.instructors.push(instructor);
    }

    pub(crate) fn push_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    pub(crate) fn push_enrollment(&mut self, enrollment: Enrollment) {
        self.enrollments.push(enrollment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseCode, CourseSpec, Semester};

    fn store_with_courses() -> RecordStore {
        let mut store = RecordStore::new();
        store.push_course(CourseSpec::new("CS101", "Intro").build().unwrap());
        store.push_course(CourseSpec::new("MA201", "Algebra").build().unwrap());
        store
    }

    #[test]
    fn test_course_ref_parse() {
        assert_eq!("2".parse::<CourseRef>().unwrap(), CourseRef::Position(2));
        assert_eq!(
            "cs101".parse::<CourseRef>().unwrap(),
            CourseRef::Code("cs101".into())
        );
        assert!("".parse::<CourseRef>().is_err());
    }

    #[test]
    fn test_course_lookup_by_position_and_code() {
        let store = store_with_courses();

        assert_eq!(
            store.course(&CourseRef::Position(2)).unwrap().code().as_str(),
            "MA201"
        );
        assert!(store.course(&CourseRef::Position(0)).is_none());
        assert!(store.course(&CourseRef::Position(3)).is_none());
        assert_eq!(
            store.course(&"ma201".into()).unwrap().title(),
            "Algebra"
        );
    }

    #[test]
    fn test_next_ids() {
        let mut store = RecordStore::new();
        assert_eq!(store.next_student_id().unwrap().value(), 1);
        assert_eq!(store.next_instructor_id().unwrap().value(), 1);

        store.push_student(
            Student::new(StudentId::new(5).unwrap(), "Ann Lee", "annlee@mail.com").unwrap(),
        );
        store.push_student(
            Student::new(StudentId::new(2).unwrap(), "Bo Chen", "bochen@mail.com").unwrap(),
        );
        assert_eq!(store.next_student_id().unwrap().value(), 6);

        store.push_student(
            Student::new(StudentId::new(u32::MAX as i64).unwrap(), "Max Id", "maxid@mail.com")
                .unwrap(),
        );
        assert!(store.next_student_id().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_enrollment_lookup() {
        let mut store = store_with_courses();
        let key = EnrollmentKey::new(
            StudentId::first(),
            CourseCode::new("CS101").unwrap(),
            Semester::Fall,
        );
        store.push_enrollment(Enrollment::new(
            key.student,
            key.course.clone(),
            key.semester,
        ));

        assert!(store.contains_enrollment(&key));
        assert!(store.enrollment(&EnrollmentRef::Position(1)).is_some());
        assert!(store.enrollment(&EnrollmentRef::Position(2)).is_none());
        assert!(store.enrollment(&EnrollmentRef::Key(key)).is_some());

        let lower = EnrollmentKey::new(
            StudentId::first(),
            CourseCode::new("cs101").unwrap(),
            Semester::Fall,
        );
        assert!(store.contains_enrollment(&lower));
        assert_eq!(store.enrollment_index(&EnrollmentRef::Key(lower)), Some(0));
    }
}
