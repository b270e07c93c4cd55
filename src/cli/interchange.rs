//! CLI commands for importing and exporting records

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand, ValueEnum};

use crate::error::{CcrmError, CcrmResult};
use crate::services::EnrollmentEngine;
use crate::storage::WriteMode;

/// Which collection a file holds
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EntityKind {
    Students,
    Instructors,
    Courses,
    Enrollments,
}

impl EntityKind {
    fn file_name(self) -> &'static str {
        match self {
            Self::Students => "students.csv",
            Self::Instructors => "instructors.csv",
            Self::Courses => "courses.csv",
            Self::Enrollments => "enrollments.csv",
        }
    }
}

/// Arguments for `import`
#[derive(Args)]
pub struct ImportArgs {
    /// Collection the file holds
    #[arg(value_enum)]
    pub entity: EntityKind,
    /// Path to the file
    pub file: PathBuf,
}

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Write the four interchange files into a directory
    Csv {
        /// Output directory
        dir: PathBuf,
        /// Append to existing files instead of replacing them
        #[arg(long)]
        append: bool,
    },
    /// Write the full record set as JSON
    Json {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle `import`
///
/// Records merge into the current set; malformed lines and duplicates are
/// reported and skipped.
pub fn handle_import(engine: &mut EnrollmentEngine, args: ImportArgs) -> CcrmResult<bool> {
    let path = args.file.as_path();
    let report = match args.entity {
        EntityKind::Students => engine.import_students(path)?,
        EntityKind::Instructors => engine.import_instructors(path)?,
        EntityKind::Courses => engine.import_courses(path)?,
        EntityKind::Enrollments => engine.import_enrollments(path)?,
    };

    println!("{}", report.summary());
    for skipped in &report.skipped {
        println!("  line {}: {}", skipped.line, skipped.reason);
    }
    Ok(report.loaded > 0)
}

/// Handle export commands
pub fn handle_export_command(engine: &EnrollmentEngine, cmd: ExportCommands) -> CcrmResult<bool> {
    match cmd {
        ExportCommands::Csv { dir, append } => {
            export_csv(engine, &dir, append)?;
            println!("Exported records to {}", dir.display());
        }
        ExportCommands::Json { output: Some(output) } => {
            let file = File::create(&output).map_err(|e| {
                CcrmError::Io(format!("Failed to create file {}: {}", output.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            engine.export_json(&mut writer)?;
            writer.flush()?;
            println!("Full record set exported to: {}", output.display());
        }
        ExportCommands::Json { output: None } => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            engine.export_json(&mut writer)?;
            writeln!(writer)?;
        }
    }
    Ok(false)
}

fn export_csv(engine: &EnrollmentEngine, dir: &Path, append: bool) -> CcrmResult<()> {
    fs::create_dir_all(dir)
        .map_err(|e| CcrmError::Io(format!("Failed to create {}: {}", dir.display(), e)))?;

    let mode = if append {
        WriteMode::Append
    } else {
        WriteMode::Overwrite
    };

    engine.export_students(&dir.join(EntityKind::Students.file_name()), mode)?;
    engine.export_instructors(&dir.join(EntityKind::Instructors.file_name()), mode)?;
    engine.export_courses(&dir.join(EntityKind::Courses.file_name()), mode)?;
    engine.export_enrollments(&dir.join(EntityKind::Enrollments.file_name()), mode)?;
    Ok(())
}
