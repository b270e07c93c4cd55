//! Person roles
//!
//! Students and instructors share an identity (ID, name, email, creation date,
//! active flag). The role-specific data rides along in the `role` field, and
//! the role type also fixes which ID space the person lives in.

use chrono::{Local, NaiveDate};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;

use super::course::{CourseCode, UNSET_DEPARTMENT};
use super::ids::{InstructorId, StudentId};
use crate::error::{CcrmError, CcrmResult};

/// Tag identifying a person's role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleKind {
    Student,
    Instructor,
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "Student"),
            Self::Instructor => write!(f, "Instructor"),
        }
    }
}

/// Role-specific data attached to a [`Person`]
pub trait Role: Clone + fmt::Debug + Serialize + DeserializeOwned {
    /// ID space for this role
    type Id: Copy + Eq + Ord + fmt::Debug + fmt::Display + Serialize + DeserializeOwned;

    const KIND: RoleKind;
}

/// Data carried only by students
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRole {
    /// Every course the student has ever enrolled in, first enrollment first
    #[serde(default)]
    enrolled_courses: Vec<CourseCode>,
}

impl Role for StudentRole {
    type Id = StudentId;
    const KIND: RoleKind = RoleKind::Student;
}

/// Data carried only by instructors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorRole {
    department: String,
}

impl Role for InstructorRole {
    type Id = InstructorId;
    const KIND: RoleKind = RoleKind::Instructor;
}

/// A person in a given role
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(serialize = "R: Role", deserialize = "R: Role"))]
pub struct Person<R: Role> {
    id: R::Id,
    full_name: String,
    email: String,
    created_on: NaiveDate,
    active: bool,
    role: R,
}

pub type Student = Person<StudentRole>;
pub type Instructor = Person<InstructorRole>;

impl<R: Role> Person<R> {
    fn with_role(id: R::Id, full_name: &str, email: &str, role: R) -> CcrmResult<Self> {
        let full_name = full_name.trim();
        let email = email.trim();
        if full_name.is_empty() {
            return Err(CcrmError::InvalidArgument(format!(
                "{} name cannot be blank",
                R::KIND
            )));
        }
        if email.is_empty() {
            return Err(CcrmError::InvalidArgument(format!(
                "{} email cannot be blank",
                R::KIND
            )));
        }

        Ok(Self {
            id,
            full_name: full_name.to_string(),
            email: email.to_string(),
            created_on: Local::now().date_naive(),
            active: true,
            role,
        })
    }

    pub fn id(&self) -> R::Id {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn role(&self) -> RoleKind {
        R::KIND
    }

    /// Mark the person inactive. There is no way back.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Case-insensitive email comparison used for registration uniqueness
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}

impl Student {
    /// Create a student; fails on blank name or email
    pub fn new(id: StudentId, full_name: &str, email: &str) -> CcrmResult<Self> {
        Self::with_role(id, full_name, email, StudentRole::default())
    }

    /// Courses this student has ever enrolled in
    pub fn enrolled_courses(&self) -> &[CourseCode] {
        &self.role.enrolled_courses
    }

    /// Remember a course; re-adding a known course is a no-op
    pub(crate) fn record_course(&mut self, code: &CourseCode) {
        if !self.role.enrolled_courses.contains(code) {
            self.role.enrolled_courses.push(code.clone());
        }
    }
}

impl Instructor {
    /// Create an instructor; a blank department becomes "N/A"
    pub fn new(
        id: InstructorId,
        full_name: &str,
        email: &str,
        department: &str,
    ) -> CcrmResult<Self> {
        let department = match department.trim() {
            "" => UNSET_DEPARTMENT.to_string(),
            dept => dept.to_string(),
        };
        Self::with_role(id, full_name, email, InstructorRole { department })
    }

    pub fn department(&self) -> &str {
        &self.role.department
    }
}

impl<R: Role> fmt::Display for Person<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.full_name, self.email)
    }
}

/// Derive an email address from a full name: lower-cased, spaces stripped,
/// followed by `@domain`.
pub fn derive_email(full_name: &str, domain: &str) -> String {
    let local: String = full_name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != ' ')
        .collect();
    format!("{}@{}", local, domain.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_id(n: i64) -> StudentId {
        StudentId::new(n).unwrap()
    }

    #[test]
    fn test_new_student() {
        let student = Student::new(student_id(1), "Ann Lee", "annlee@mail.com").unwrap();
        assert_eq!(student.id().value(), 1);
        assert_eq!(student.full_name(), "Ann Lee");
        assert!(student.is_active());
        assert_eq!(student.role(), RoleKind::Student);
        assert!(student.enrolled_courses().is_empty());
    }

    #[test]
    fn test_blank_name_or_email_rejected() {
        assert!(Student::new(student_id(1), "  ", "a@mail.com")
            .unwrap_err()
            .is_invalid_argument());
        assert!(Student::new(student_id(1), "Ann", "")
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_deactivate_is_one_way() {
        let mut student = Student::new(student_id(1), "Ann Lee", "annlee@mail.com").unwrap();
        student.deactivate();
        assert!(!student.is_active());
        student.deactivate();
        assert!(!student.is_active());
    }

    #[test]
    fn test_record_course_is_idempotent() {
        let mut student = Student::new(student_id(1), "Ann Lee", "annlee@mail.com").unwrap();
        let cs101 = CourseCode::new("CS101").unwrap();
        let ma201 = CourseCode::new("MA201").unwrap();

        student.record_course(&cs101);
        student.record_course(&ma201);
        student.record_course(&cs101);

        assert_eq!(student.enrolled_courses(), &[cs101, ma201]);
    }

    #[test]
    fn test_instructor_department_default() {
        let id = InstructorId::first();
        let inst = Instructor::new(id, "Raj Patel", "rajpatel@mail.com", " ").unwrap();
        assert_eq!(inst.department(), "N/A");
        assert_eq!(inst.role(), RoleKind::Instructor);

        let inst = Instructor::new(id, "Raj Patel", "rajpatel@mail.com", "Physics").unwrap();
        assert_eq!(inst.department(), "Physics");
    }

    #[test]
    fn test_derive_email() {
        assert_eq!(derive_email("Ann Lee", "mail.com"), "annlee@mail.com");
        assert_eq!(derive_email("  Mary Jo  Smith ", "uni.edu"), "maryjosmith@uni.edu");
    }

    #[test]
    fn test_serialization() {
        let mut student = Student::new(student_id(3), "Ann Lee", "annlee@mail.com").unwrap();
        student.record_course(&CourseCode::new("CS101").unwrap());

        let json = serde_json::to_string(&student).unwrap();
        let back: Student = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id(), student.id());
        assert_eq!(back.email(), student.email());
        assert_eq!(back.enrolled_courses(), student.enrolled_courses());
    }
}
