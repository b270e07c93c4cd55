//! Instructor CLI commands

use clap::Subcommand;

use crate::display::person::format_instructor_list;
use crate::error::{CcrmError, CcrmResult};
use crate::models::{Instructor, InstructorId};
use crate::services::EnrollmentEngine;

/// Instructor subcommands
#[derive(Subcommand)]
pub enum InstructorCommands {
    /// Register a new instructor
    Add {
        /// Full name; the email is derived from it
        name: String,
        /// Department label
        #[arg(short, long)]
        department: String,
    },
    /// List instructors
    List {
        /// Include inactive instructors
        #[arg(short, long)]
        all: bool,
    },
    /// Mark an instructor inactive
    Deactivate {
        /// Instructor ID
        id: InstructorId,
    },
}

/// Handle an instructor command
///
/// Returns true when the record set changed.
pub fn handle_instructor_command(
    engine: &mut EnrollmentEngine,
    cmd: InstructorCommands,
) -> CcrmResult<bool> {
    match cmd {
        InstructorCommands::Add { name, department } => {
            let instructor = engine.register_instructor(&name, &department)?;
            println!(
                "Registered instructor {} (ID {}, {}, {})",
                instructor.full_name(),
                instructor.id(),
                instructor.email(),
                instructor.department()
            );
            Ok(true)
        }

        InstructorCommands::List { all } => {
            let instructors: Vec<Instructor> = engine
                .instructors()
                .iter()
                .filter(|i| all || i.is_active())
                .cloned()
                .collect();
            println!("{}", format_instructor_list(&instructors));
            Ok(false)
        }

        InstructorCommands::Deactivate { id } => {
            if !engine.deactivate_instructor(id) {
                return Err(CcrmError::instructor_not_found(id.to_string()));
            }
            println!("Deactivated instructor {}", id);
            Ok(true)
        }
    }
}
