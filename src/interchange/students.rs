//! Student interchange: `id,fullName,email`

use std::io::{Read, Write};
use std::path::Path;

use csv::StringRecord;

use super::{expect_fields, open, read_records, save, write_records, Parsed};
use crate::error::CcrmResult;
use crate::models::{Student, StudentId};
use crate::storage::file_io::WriteMode;

pub const ENTITY: &str = "students";

/// Decode students from a reader
pub fn read_students<R: Read>(reader: R) -> CcrmResult<Parsed<Student>> {
    read_records(reader, ENTITY, parse_student)
}

/// Decode students from a file
pub fn import_students(path: &Path) -> CcrmResult<Parsed<Student>> {
    read_students(open(path)?)
}

/// Encode students to a writer
pub fn write_students<W: Write>(writer: W, students: &[Student]) -> CcrmResult<()> {
    write_records(writer, students.iter().map(to_row))
}

/// Encode students to a file
pub fn export_students(path: &Path, students: &[Student], mode: WriteMode) -> CcrmResult<()> {
    save(path, students.iter().map(to_row), mode)
}

fn to_row(student: &Student) -> Vec<String> {
    vec![
        student.id().to_string(),
        student.full_name().to_string(),
        student.email().to_string(),
    ]
}

fn parse_student(record: &StringRecord) -> Result<Student, String> {
    expect_fields(record, &[3])?;
    let id: StudentId = record[0].parse().map_err(|e| format!("{}", e))?;
    Student::new(id, &record[1], &record[2]).map_err(|e| e.to_string())
}
