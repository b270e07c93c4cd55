//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.
//! Handlers that touch records return true when the record set changed, so
//! the caller knows to save.

pub mod backup;
pub mod course;
pub mod enrollment;
pub mod instructor;
pub mod interchange;
pub mod student;

pub use backup::{handle_backup_command, BackupCommands};
pub use course::{handle_course_command, CourseCommands};
pub use enrollment::{
    handle_enroll, handle_enrollments, handle_grade, handle_transcript, EnrollArgs,
    EnrollmentsArgs, GradeArgs,
};
pub use instructor::{handle_instructor_command, InstructorCommands};
pub use interchange::{handle_export_command, handle_import, ExportCommands, ImportArgs};
pub use student::{handle_student_command, StudentCommands};
