//! Enrollment, grading and transcript CLI commands

use std::str::FromStr;

use clap::Args;

use crate::display::enrollment::{format_enrollment_list, format_transcript};
use crate::error::{CcrmError, CcrmResult};
use crate::models::{CourseCode, EnrollmentKey, Grade, Semester, StudentId};
use crate::services::EnrollmentEngine;
use crate::storage::{CourseRef, EnrollmentRef};

/// Arguments for `enroll`
#[derive(Args)]
pub struct EnrollArgs {
    /// Student ID
    pub student: StudentId,
    /// Course code or list number
    #[arg(value_parser = CourseRef::from_str)]
    pub course: CourseRef,
    /// Semester (SPRING, SUMMER, FALL)
    pub semester: Semester,
}

/// Arguments for `grade`
#[derive(Args)]
pub struct GradeArgs {
    /// Grade (S, A, B, C, D, E, F)
    pub grade: Grade,

    /// Enrollment number from `ccrm enrollments`
    #[arg(short, long, required_unless_present = "student", conflicts_with = "student")]
    pub number: Option<usize>,

    /// Student ID, with --course and --semester
    #[arg(long, requires_all = ["course", "semester"])]
    pub student: Option<StudentId>,

    /// Course code
    #[arg(long)]
    pub course: Option<String>,

    /// Semester
    #[arg(long)]
    pub semester: Option<Semester>,
}

impl GradeArgs {
    fn enrollment_ref(&self) -> CcrmResult<EnrollmentRef> {
        if let Some(number) = self.number {
            return Ok(EnrollmentRef::Position(number));
        }
        match (self.student, &self.course, self.semester) {
            (Some(student), Some(course), Some(semester)) => Ok(EnrollmentRef::Key(
                EnrollmentKey::new(student, CourseCode::new(course.as_str())?, semester),
            )),
            _ => Err(CcrmError::InvalidArgument(
                "Give an enrollment number or --student, --course and --semester".into(),
            )),
        }
    }
}

/// Arguments for `enrollments`
#[derive(Args)]
pub struct EnrollmentsArgs {
    /// Only show this student's enrollments
    #[arg(short, long)]
    pub student: Option<StudentId>,

    /// Only show this semester
    #[arg(long)]
    pub semester: Option<Semester>,
}

/// Handle `enroll`
pub fn handle_enroll(engine: &mut EnrollmentEngine, args: EnrollArgs) -> CcrmResult<bool> {
    let enrollment = engine.enroll(args.student, &args.course, args.semester)?;
    let credits = engine.semester_credits(args.student, args.semester);
    println!(
        "Enrolled student {} in {} for {} ({} of {} credits)",
        enrollment.student(),
        enrollment.course(),
        enrollment.semester(),
        credits,
        engine.settings().max_credits_per_semester
    );
    Ok(true)
}

/// Handle `grade`
pub fn handle_grade(engine: &mut EnrollmentEngine, args: GradeArgs) -> CcrmResult<bool> {
    let enrollment_ref = args.enrollment_ref()?;
    if !engine.record_grade(&enrollment_ref, args.grade) {
        let identifier = match &enrollment_ref {
            EnrollmentRef::Position(p) => format!("#{}", p),
            EnrollmentRef::Key(key) => key.to_string(),
        };
        return Err(CcrmError::enrollment_not_found(identifier));
    }
    println!("Recorded grade {}", args.grade);
    Ok(true)
}

/// Handle `enrollments`
pub fn handle_enrollments(
    engine: &EnrollmentEngine,
    args: EnrollmentsArgs,
) -> CcrmResult<bool> {
    let rows: Vec<_> = engine
        .enrollments()
        .iter()
        .enumerate()
        .map(|(i, e)| (i + 1, e))
        .filter(|(_, e)| args.student.map_or(true, |s| e.student() == s))
        .filter(|(_, e)| args.semester.map_or(true, |s| e.semester() == s))
        .collect();
    println!("{}", format_enrollment_list(&rows, engine.store()));
    Ok(false)
}

/// Handle `transcript`
pub fn handle_transcript(engine: &EnrollmentEngine, student: StudentId) -> CcrmResult<bool> {
    let report = engine
        .transcript_report(student)
        .ok_or_else(|| CcrmError::student_not_found(student.to_string()))?;
    print!("{}", format_transcript(&report));
    Ok(false)
}
