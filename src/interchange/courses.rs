//! Course interchange: `code,title,credits`

use std::io::{Read, Write};
use std::path::Path;

use csv::StringRecord;

use super::{expect_fields, open, read_records, save, write_records, Parsed};
use crate::error::CcrmResult;
use crate::models::{Course, CourseSpec};
use crate::storage::file_io::WriteMode;

pub const ENTITY: &str = "courses";

pub fn read_courses<R: Read>(reader: R) -> CcrmResult<Parsed<Course>> {
    read_records(reader, ENTITY, parse_course)
}

pub fn import_courses(path: &Path) -> CcrmResult<Parsed<Course>> {
    read_courses(open(path)?)
}

pub fn write_courses<W: Write>(writer: W, courses: &[Course]) -> CcrmResult<()> {
    write_records(writer, courses.iter().map(to_row))
}

pub fn export_courses(path: &Path, courses: &[Course], mode: WriteMode) -> CcrmResult<()> {
    save(path, courses.iter().map(to_row), mode)
}

fn to_row(course: &Course) -> Vec<String> {
    vec![
        course.code().to_string(),
        course.title().to_string(),
        course.credits().to_string(),
    ]
}

fn parse_course(record: &StringRecord) -> Result<Course, String> {
    expect_fields(record, &[3])?;
    let credits: u32 = record[2]
        .parse()
        .map_err(|_| format!("invalid credits '{}'", &record[2]))?;
    CourseSpec::new(&record[0], &record[1])
        .credits(credits)
        .build()
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_courses() {
        let parsed = read_courses("CS101,Intro,4\nMA201,Algebra,3\n".as_bytes()).unwrap();
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.records[0].1.credits(), 4);
        assert_eq!(parsed.records[1].1.code().as_str(), "MA201");
    }

    #[test]
    fn test_out_of_range_and_non_numeric_credits_skipped() {
        let input = "CS101,Intro,9\nCS102,Data,three\nCS103,Systems,6\n";
        let parsed = read_courses(input.as_bytes()).unwrap();

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].1.code().as_str(), "CS103");
        assert_eq!(parsed.report.skipped.len(), 2);
    }

    #[test]
    fn test_comma_in_title_splits_the_line() {
        let parsed = read_courses("CS101,Intro, Part 1,4\n".as_bytes()).unwrap();
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.report.skipped.len(), 1);
    }
}
