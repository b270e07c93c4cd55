//! Core data models for CCRM
//!
//! This module contains the data structures that represent the academic
//! records domain: students, instructors, courses, enrollments, grades and
//! semesters.

pub mod course;
pub mod enrollment;
pub mod grade;
pub mod ids;
pub mod person;
pub mod semester;

pub use course::{Course, CourseCode, CourseSpec};
pub use enrollment::{Enrollment, EnrollmentKey};
pub use grade::Grade;
pub use ids::{InstructorId, StudentId};
pub use person::{derive_email, Instructor, Person, Role, RoleKind, Student};
pub use semester::Semester;
