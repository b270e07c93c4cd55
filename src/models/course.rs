//! Course model
//!
//! A course is identified by its code. Codes are compared case-insensitively
//! for uniqueness but keep the spelling they were registered with.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::InstructorId;
use super::semester::Semester;
use crate::error::{CcrmError, CcrmResult};

/// Valid credit range for a course
pub const CREDIT_RANGE: std::ops::RangeInclusive<u32> = 1..=6;

/// Credits a course carries when none are specified
pub const DEFAULT_CREDITS: u32 = 3;

/// Department label used when none is given
pub const UNSET_DEPARTMENT: &str = "N/A";

/// Natural key of a course
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseCode(String);

impl CourseCode {
    /// Create a course code, rejecting blank input
    pub fn new(code: impl Into<String>) -> CcrmResult<Self> {
        let code = code.into().trim().to_string();
        if code.is_empty() {
            return Err(CcrmError::InvalidArgument(
                "Course code cannot be blank".into(),
            ));
        }
        Ok(Self(code))
    }

    /// The code as registered
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison used for uniqueness and lookup
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim().to_lowercase()
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl TryFrom<String> for CourseCode {
    type Error = CcrmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CourseCode> for String {
    fn from(code: CourseCode) -> String {
        code.0
    }
}

/// Named, defaulted parameters for building a [`Course`]
///
/// ```rust,ignore
/// let course = CourseSpec::new("CS101", "Intro").credits(4).build()?;
/// ```
#[derive(Debug, Clone)]
pub struct CourseSpec {
    pub code: String,
    pub title: String,
    pub credits: u32,
    pub instructor: Option<InstructorId>,
    pub department: String,
    pub semester: Option<Semester>,
}

impl CourseSpec {
    /// Start a spec from the mandatory fields
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            credits: DEFAULT_CREDITS,
            instructor: None,
            department: UNSET_DEPARTMENT.to_string(),
            semester: None,
        }
    }

    pub fn credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    pub fn instructor(mut self, instructor: InstructorId) -> Self {
        self.instructor = Some(instructor);
        self
    }

    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn semester(mut self, semester: Semester) -> Self {
        self.semester = Some(semester);
        self
    }

    /// Validate and build the course
    pub fn build(self) -> CcrmResult<Course> {
        Course::new(self)
    }
}

/// A course offered by the institution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    code: CourseCode,
    title: String,
    credits: u32,

    /// Assigned instructor; a weak reference that is not re-validated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instructor: Option<InstructorId>,

    #[serde(default = "default_department")]
    department: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    semester: Option<Semester>,
}

fn default_department() -> String {
    UNSET_DEPARTMENT.to_string()
}

impl Course {
    /// Validate a spec and construct the course
    pub fn new(spec: CourseSpec) -> CcrmResult<Self> {
        let code = CourseCode::new(spec.code)?;

        let title = spec.title.trim().to_string();
        if title.is_empty() {
            return Err(CcrmError::InvalidArgument(
                "Course title cannot be blank".into(),
            ));
        }

        if !CREDIT_RANGE.contains(&spec.credits) {
            return Err(CcrmError::InvalidArgument(format!(
                "Credits must be between {} and {}, got {}",
                CREDIT_RANGE.start(),
                CREDIT_RANGE.end(),
                spec.credits
            )));
        }

        let department = if spec.department.trim().is_empty() {
            default_department()
        } else {
            spec.department.trim().to_string()
        };

        Ok(Self {
            code,
            title,
            credits: spec.credits,
            instructor: spec.instructor,
            department,
            semester: spec.semester,
        })
    }

    pub fn code(&self) -> &CourseCode {
        &self.code
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn credits(&self) -> u32 {
        self.credits
    }

    pub fn instructor(&self) -> Option<InstructorId> {
        self.instructor
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn semester(&self) -> Option<Semester> {
        self.semester
    }

    /// Overwrite the assigned instructor (last write wins)
    pub(crate) fn set_instructor(&mut self, instructor: InstructorId) {
        self.instructor = Some(instructor);
    }

    /// Restore the fields the flat course file does not carry
    pub(crate) fn restore_details(
        &mut self,
        instructor: Option<InstructorId>,
        department: &str,
        semester: Option<Semester>,
    ) {
        self.instructor = instructor;
        self.department = match department.trim() {
            "" => default_department(),
            d => d.to_string(),
        };
        self.semester = semester;
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({} cr)", self.code, self.title, self.credits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let course = CourseSpec::new("CS101", "Intro").build().unwrap();
        assert_eq!(course.credits(), 3);
        assert_eq!(course.department(), "N/A");
        assert!(course.instructor().is_none());
        assert!(course.semester().is_none());
    }

    #[test]
    fn test_credit_bounds() {
        assert!(CourseSpec::new("CS101", "Intro").credits(1).build().is_ok());
        assert!(CourseSpec::new("CS101", "Intro").credits(6).build().is_ok());

        let err = CourseSpec::new("CS101", "Intro").credits(0).build().unwrap_err();
        assert!(err.is_invalid_argument());
        let err = CourseSpec::new("CS101", "Intro").credits(7).build().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_blank_fields_rejected() {
        assert!(CourseSpec::new("  ", "Intro").build().is_err());
        assert!(CourseSpec::new("CS101", "").build().is_err());
    }

    #[test]
    fn test_optional_fields() {
        let instructor = InstructorId::first();
        let course = CourseSpec::new("MA201", "Linear Algebra")
            .credits(4)
            .department("Mathematics")
            .semester(Semester::Spring)
            .instructor(instructor)
            .build()
            .unwrap();

        assert_eq!(course.department(), "Mathematics");
        assert_eq!(course.semester(), Some(Semester::Spring));
        assert_eq!(course.instructor(), Some(instructor));
    }

    #[test]
    fn test_code_matching_is_case_insensitive() {
        let code = CourseCode::new("CS101").unwrap();
        assert!(code.matches("cs101"));
        assert!(code.matches(" Cs101 "));
        assert!(!code.matches("CS102"));
        assert_eq!(code.as_str(), "CS101");
    }
}
