//! Course CLI commands

use std::str::FromStr;

use clap::Subcommand;

use crate::display::course::format_course_list;
use crate::error::{CcrmError, CcrmResult};
use crate::models::{CourseSpec, InstructorId, Semester};
use crate::services::EnrollmentEngine;
use crate::storage::CourseRef;

/// Course subcommands
#[derive(Subcommand)]
pub enum CourseCommands {
    /// Register a new course
    Add {
        /// Course code, unique ignoring case
        code: String,
        /// Course title
        title: String,
        /// Credits (1-6); defaults to the configured value
        #[arg(short, long)]
        credits: Option<u32>,
        /// Department label
        #[arg(short, long)]
        department: Option<String>,
        /// Semester the course is offered in (SPRING, SUMMER, FALL)
        #[arg(short, long)]
        semester: Option<Semester>,
        /// Instructor ID to assign
        #[arg(short, long)]
        instructor: Option<InstructorId>,
    },
    /// List all courses
    List,
    /// Find courses whose code starts with a prefix
    Search {
        /// Code prefix, matched ignoring case
        prefix: String,
    },
    /// Assign an instructor to a course
    Assign {
        /// Instructor ID
        instructor: InstructorId,
        /// Course code or list number
        #[arg(value_parser = CourseRef::from_str)]
        course: CourseRef,
    },
}

/// Handle a course command
///
/// Returns true when the record set changed.
pub fn handle_course_command(
    engine: &mut EnrollmentEngine,
    cmd: CourseCommands,
) -> CcrmResult<bool> {
    match cmd {
        CourseCommands::Add {
            code,
            title,
            credits,
            department,
            semester,
            instructor,
        } => {
            let mut spec = CourseSpec::new(code, title)
                .credits(credits.unwrap_or(engine.settings().default_credits));
            if let Some(department) = department {
                spec = spec.department(department);
            }
            if let Some(semester) = semester {
                spec = spec.semester(semester);
            }
            if let Some(instructor) = instructor {
                spec = spec.instructor(instructor);
            }

            let course = engine.register_course_spec(spec)?;
            println!("Registered course {}", course);
            Ok(true)
        }

        CourseCommands::List => {
            let courses: Vec<_> = engine.courses().iter().collect();
            println!("{}", format_course_list(&courses, engine.store()));
            Ok(false)
        }

        CourseCommands::Search { prefix } => {
            let matches = engine.search_courses_by_code(&prefix);
            println!("{}", format_course_list(&matches, engine.store()));
            Ok(false)
        }

        CourseCommands::Assign { instructor, course } => {
            if engine.instructor(instructor).is_none() {
                return Err(CcrmError::instructor_not_found(instructor.to_string()));
            }
            if !engine.assign_instructor(instructor, &course) {
                return Err(CcrmError::course_not_found(course.to_string()));
            }
            println!("Assigned instructor {} to course {}", instructor, course);
            Ok(true)
        }
    }
}
