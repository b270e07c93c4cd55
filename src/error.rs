//! Custom error types for CCRM
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for CCRM operations
#[derive(Error, Debug)]
pub enum CcrmError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed or missing required input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// The (student, course, semester) triple is already enrolled
    #[error("{student} is already enrolled in {course} for {semester}")]
    DuplicateEnrollment {
        student: String,
        course: String,
        semester: String,
    },

    /// Admitting the enrollment would push the semester load over the ceiling
    #[error("{student} is at {current} credits for {semester}; adding {requested} exceeds the limit of {limit}")]
    CreditLimitExceeded {
        student: String,
        semester: String,
        current: u32,
        requested: u32,
        limit: u32,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CcrmError {
    /// Create a "not found" error for students
    pub fn student_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Student",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for instructors
    pub fn instructor_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Instructor",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for courses
    pub fn course_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Course",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for enrollments
    pub fn enrollment_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Enrollment",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Business-rule rejections are expected outcomes the caller may retry
    /// with different parameters.
    pub fn is_rule_rejection(&self) -> bool {
        matches!(
            self,
            Self::DuplicateEnrollment { .. } | Self::CreditLimitExceeded { .. }
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CcrmError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CcrmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for CcrmError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<walkdir::Error> for CcrmError {
    fn from(err: walkdir::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for CCRM operations
pub type CcrmResult<T> = Result<T, CcrmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CcrmError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = CcrmError::student_not_found("42");
        assert_eq!(err.to_string(), "Student not found: 42");
        assert!(err.is_not_found());
        assert!(!err.is_rule_rejection());
    }

    #[test]
    fn test_credit_limit_error() {
        let err = CcrmError::CreditLimitExceeded {
            student: "Ann Lee".into(),
            semester: "FALL".into(),
            current: 20,
            requested: 4,
            limit: 21,
        };
        assert_eq!(
            err.to_string(),
            "Ann Lee is at 20 credits for FALL; adding 4 exceeds the limit of 21"
        );
        assert!(err.is_rule_rejection());
    }

    #[test]
    fn test_duplicate_enrollment_error() {
        let err = CcrmError::DuplicateEnrollment {
            student: "Ann Lee".into(),
            course: "CS101".into(),
            semester: "FALL".into(),
        };
        assert_eq!(
            err.to_string(),
            "Ann Lee is already enrolled in CS101 for FALL"
        );
        assert!(err.is_rule_rejection());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ccrm_err: CcrmError = io_err.into();
        assert!(matches!(ccrm_err, CcrmError::Io(_)));
    }
}
