//! Interchange codec
//!
//! Reads and writes each entity collection as a flat, comma-separated text
//! file: no header, one record per non-blank line, fields in a fixed order.
//!
//! | File            | Fields                                        |
//! |-----------------|-----------------------------------------------|
//! | students.csv    | id, fullName, email                           |
//! | instructors.csv | id, fullName, email, department               |
//! | courses.csv     | code, title, credits                          |
//! | enrollments.csv | studentId, courseCode, semester, grade or ""  |
//!
//! Field values are written verbatim. A comma inside a name or title is not
//! escaped and will split the field on the next load.
//!
//! Loading is best effort: a line that fails to parse is logged, recorded in
//! the [`ImportReport`] and dropped, and the rest of the file still loads.

pub mod courses;
pub mod enrollments;
pub mod instructors;
pub mod json;
pub mod students;

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};
use log::warn;

use crate::error::{CcrmError, CcrmResult};
use crate::storage::file_io::{write_bytes, WriteMode};

/// A line dropped during import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source file
    pub line: u64,
    pub reason: String,
}

/// Outcome of loading one interchange file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub entity: &'static str,
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

impl ImportReport {
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            loaded: 0,
            skipped: Vec::new(),
        }
    }

    /// Record a dropped line and emit a diagnostic
    pub fn skip(&mut self, line: u64, reason: impl Into<String>) {
        let reason = reason.into();
        warn!("Skipping {} line {}: {}", self.entity, line, reason);
        self.skipped.push(SkippedLine { line, reason });
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn summary(&self) -> String {
        if self.skipped.is_empty() {
            format!("{} {} loaded", self.loaded, self.entity)
        } else {
            format!(
                "{} {} loaded, {} line(s) skipped",
                self.loaded,
                self.entity,
                self.skipped.len()
            )
        }
    }
}

/// Records decoded from a file, each tagged with its line number
#[derive(Debug)]
pub struct Parsed<T> {
    pub records: Vec<(u64, T)>,
    pub report: ImportReport,
}

impl<T> Parsed<T> {
    fn new(entity: &'static str) -> Self {
        Self {
            records: Vec::new(),
            report: ImportReport::new(entity),
        }
    }
}

/// Decode every non-blank line of `reader` with `parse`
///
/// I/O failures abort the read; anything else only drops the offending line.
pub(crate) fn read_records<R, T, F>(
    reader: R,
    entity: &'static str,
    mut parse: F,
) -> CcrmResult<Parsed<T>>
where
    R: Read,
    F: FnMut(&StringRecord) -> Result<T, String>,
{
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut parsed = Parsed::new(entity);

    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                if let csv::ErrorKind::Io(_) = e.kind() {
                    return Err(CcrmError::Io(format!("Failed to read {}: {}", entity, e)));
                }
                let line = e.position().map_or(0, |p| p.line());
                parsed.report.skip(line, format!("unreadable line: {}", e));
                continue;
            }
        };

        if record.iter().all(str::is_empty) {
            continue;
        }

        let line = record.position().map_or(0, |p| p.line());
        match parse(&record) {
            Ok(value) => parsed.records.push((line, value)),
            Err(reason) => parsed.report.skip(line, reason),
        }
    }

    Ok(parsed)
}

/// Encode rows verbatim, one per line
pub(crate) fn write_records<W, I>(writer: W, rows: I) -> CcrmResult<()>
where
    W: Write,
    I: IntoIterator<Item = Vec<String>>,
{
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for row in rows {
        csv_writer.write_record(&row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Open an interchange file for reading
pub(crate) fn open(path: &Path) -> CcrmResult<BufReader<File>> {
    let file = File::open(path)
        .map_err(|e| CcrmError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    Ok(BufReader::new(file))
}

/// Encode rows and write them to `path`
pub(crate) fn save<I>(path: &Path, rows: I, mode: WriteMode) -> CcrmResult<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut buffer = Vec::new();
    write_records(&mut buffer, rows)?;
    write_bytes(path, &buffer, mode)
}

/// Check a record has one of the accepted field counts
pub(crate) fn expect_fields(record: &StringRecord, accepted: &[usize]) -> Result<(), String> {
    if accepted.contains(&record.len()) {
        Ok(())
    } else {
        Err(format!(
            "expected {} fields, found {}",
            accepted
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(" or "),
            record.len()
        ))
    }
}
