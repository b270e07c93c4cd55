//! Instructor interchange: `id,fullName,email,department`

use std::io::{Read, Write};
use std::path::Path;

use csv::StringRecord;

use super::{expect_fields, open, read_records, save, write_records, Parsed};
use crate::error::CcrmResult;
use crate::models::{Instructor, InstructorId};
use crate::storage::file_io::WriteMode;

pub const ENTITY: &str = "instructors";

pub fn read_instructors<R: Read>(reader: R) -> CcrmResult<Parsed<Instructor>> {
    read_records(reader, ENTITY, parse_instructor)
}

pub fn import_instructors(path: &Path) -> CcrmResult<Parsed<Instructor>> {
    read_instructors(open(path)?)
}

pub fn write_instructors<W: Write>(writer: W, instructors: &[Instructor]) -> CcrmResult<()> {
    write_records(writer, instructors.iter().map(to_row))
}

pub fn export_instructors(
    path: &Path,
    instructors: &[Instructor],
    mode: WriteMode,
) -> CcrmResult<()> {
    save(path, instructors.iter().map(to_row), mode)
}

fn to_row(instructor: &Instructor) -> Vec<String> {
    vec![
        instructor.id().to_string(),
        instructor.full_name().to_string(),
        instructor.email().to_string(),
        instructor.department().to_string(),
    ]
}

/// The department column may be missing; it then defaults to "N/A"
fn parse_instructor(record: &StringRecord) -> Result<Instructor, String> {
    expect_fields(record, &[3, 4])?;
    let id: InstructorId = record[0].parse().map_err(|e| format!("{}", e))?;
    let department = record.get(3).unwrap_or("");
    Instructor::new(id, &record[1], &record[2], department).map_err(|e| e.to_string())
}
