//! Enrollment interchange: `studentId,courseCode,semester,grade`
//!
//! Enrollments refer to students and courses by natural key, so decoding
//! needs a store that already holds them. Lines whose student ID or course
//! code does not resolve are dropped.

use std::io::{Read, Write};
use std::path::Path;

use csv::StringRecord;

use super::{expect_fields, open, read_records, save, write_records, Parsed};
use crate::error::CcrmResult;
use crate::models::{Enrollment, Grade, Semester, StudentId};
use crate::storage::file_io::WriteMode;
use crate::storage::RecordStore;

pub const ENTITY: &str = "enrollments";

/// Decode enrollments, resolving references against `store`
pub fn read_enrollments<R: Read>(reader: R, store: &RecordStore) -> CcrmResult<Parsed<Enrollment>> {
    read_records(reader, ENTITY, |record| parse_enrollment(record, store))
}

pub fn import_enrollments(path: &Path, store: &RecordStore) -> CcrmResult<Parsed<Enrollment>> {
    read_enrollments(open(path)?, store)
}

pub fn write_enrollments<W: Write>(writer: W, enrollments: &[Enrollment]) -> CcrmResult<()> {
    write_records(writer, enrollments.iter().map(to_row))
}

pub fn export_enrollments(
    path: &Path,
    enrollments: &[Enrollment],
    mode: WriteMode,
) -> CcrmResult<()> {
    save(path, enrollments.iter().map(to_row), mode)
}

fn to_row(enrollment: &Enrollment) -> Vec<String> {
    vec![
        enrollment.student().to_string(),
        enrollment.course().to_string(),
        enrollment.semester().to_string(),
        enrollment.grade().map(|g| g.to_string()).unwrap_or_default(),
    ]
}

fn parse_enrollment(record: &StringRecord, store: &RecordStore) -> Result<Enrollment, String> {
    expect_fields(record, &[3, 4])?;

    let student: StudentId = record[0].parse().map_err(|e| format!("{}", e))?;
    if store.student(student).is_none() {
        return Err(format!("unknown student ID {}", student));
    }

    let course = store
        .course_by_code(&record[1])
        .map(|c| c.code().clone())
        .ok_or_else(|| format!("unknown course code '{}'", &record[1]))?;

    let semester: Semester = record[2].parse().map_err(|e| format!("{}", e))?;

    let grade = match record.get(3) {
        None | Some("") => None,
        Some(token) => Some(token.parse::<Grade>().map_err(|e| e.to_string())?),
    };

    let mut enrollment = Enrollment::new(student, course, semester);
    if let Some(grade) = grade {
        enrollment.set_grade(grade);
    }
    Ok(enrollment)
}
