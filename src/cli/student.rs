//! Student CLI commands
//!
//! Implements CLI commands for student management.

use clap::Subcommand;

use crate::display::person::{format_student_details, format_student_list};
use crate::error::{CcrmError, CcrmResult};
use crate::models::{Student, StudentId};
use crate::services::EnrollmentEngine;

/// Student subcommands
#[derive(Subcommand)]
pub enum StudentCommands {
    /// Register a new student
    Add {
        /// Full name; the email is derived from it
        name: String,
    },
    /// List students
    List {
        /// Include inactive students
        #[arg(short, long)]
        all: bool,
    },
    /// Show a student's details
    Show {
        /// Student ID
        id: StudentId,
    },
    /// Mark a student inactive
    Deactivate {
        /// Student ID
        id: StudentId,
    },
}

/// Handle a student command
///
/// Returns true when the record set changed.
pub fn handle_student_command(
    engine: &mut EnrollmentEngine,
    cmd: StudentCommands,
) -> CcrmResult<bool> {
    match cmd {
        StudentCommands::Add { name } => {
            let student = engine.register_student(&name)?;
            println!(
                "Registered student {} (ID {}, {})",
                student.full_name(),
                student.id(),
                student.email()
            );
            Ok(true)
        }

        StudentCommands::List { all } => {
            let students: Vec<Student> = engine
                .students()
                .iter()
                .filter(|s| all || s.is_active())
                .cloned()
                .collect();
            println!("{}", format_student_list(&students));
            Ok(false)
        }

        StudentCommands::Show { id } => {
            let student = engine
                .student(id)
                .ok_or_else(|| CcrmError::student_not_found(id.to_string()))?;
            print!("{}", format_student_details(student));
            Ok(false)
        }

        StudentCommands::Deactivate { id } => {
            if !engine.deactivate_student(id) {
                return Err(CcrmError::student_not_found(id.to_string()));
            }
            println!("Deactivated student {}", id);
            Ok(true)
        }
    }
}
