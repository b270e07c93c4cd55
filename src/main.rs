use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, warn};

use ccrm::cli::{
    handle_backup_command, handle_course_command, handle_enroll, handle_enrollments,
    handle_export_command, handle_grade, handle_import, handle_instructor_command,
    handle_student_command, handle_transcript,
};
use ccrm::config::{paths::CcrmPaths, settings::Settings};
use ccrm::models::StudentId;
use ccrm::services::EnrollmentEngine;
use ccrm::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ccrm",
    version,
    about = "Campus course and records manager",
    long_about = "CCRM keeps an institution's students, instructors, courses and \
                  enrollments in flat files, enforces per-semester credit limits, \
                  and reports transcripts and credit-weighted GPA."
)]
struct Cli {
    /// Base directory for settings, data and snapshots
    #[arg(long, env = "CCRM_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level (overrides RUST_LOG)
    #[arg(long, value_enum, global = true)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Student management commands
    #[command(subcommand)]
    Student(ccrm::cli::StudentCommands),

    /// Instructor management commands
    #[command(subcommand)]
    Instructor(ccrm::cli::InstructorCommands),

    /// Course management commands
    #[command(subcommand)]
    Course(ccrm::cli::CourseCommands),

    /// Enroll a student in a course for a semester
    Enroll(ccrm::cli::EnrollArgs),

    /// Record or replace a grade
    Grade(ccrm::cli::GradeArgs),

    /// List enrollments
    Enrollments(ccrm::cli::EnrollmentsArgs),

    /// Show a student's transcript and GPA
    Transcript {
        /// Student ID
        student: StudentId,
    },

    /// Merge records from an interchange file
    Import(ccrm::cli::ImportArgs),

    /// Export records
    #[command(subcommand)]
    Export(ccrm::cli::ExportCommands),

    /// Backup management commands
    #[command(subcommand)]
    Backup(ccrm::cli::BackupCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        log::LevelFilter::Debug
    } else if let Some(level) = cli.log_level {
        level.to_level_filter()
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => CcrmPaths::with_base_dir(dir),
        None => CcrmPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    // Load the record set
    let storage = Storage::new(paths.clone())?;
    let mut engine = EnrollmentEngine::new(settings.clone());
    for report in storage.load_all(&mut engine)? {
        if report.is_clean() {
            debug!("{}", report.summary());
        } else {
            warn!("{}", report.summary());
        }
    }

    let changed = match cli.command {
        Some(Commands::Student(cmd)) => handle_student_command(&mut engine, cmd)?,
        Some(Commands::Instructor(cmd)) => handle_instructor_command(&mut engine, cmd)?,
        Some(Commands::Course(cmd)) => handle_course_command(&mut engine, cmd)?,
        Some(Commands::Enroll(args)) => handle_enroll(&mut engine, args)?,
        Some(Commands::Grade(args)) => handle_grade(&mut engine, args)?,
        Some(Commands::Enrollments(args)) => handle_enrollments(&engine, args)?,
        Some(Commands::Transcript { student }) => handle_transcript(&engine, student)?,
        Some(Commands::Import(args)) => handle_import(&mut engine, args)?,
        Some(Commands::Export(cmd)) => handle_export_command(&engine, cmd)?,
        Some(Commands::Backup(cmd)) => {
            handle_backup_command(&paths, &settings, cmd)?;
            false
        }
        Some(Commands::Config) => {
            println!("CCRM Configuration");
            println!("==================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Max credits per semester: {}", settings.max_credits_per_semester);
            println!("  Email domain:             {}", settings.email_domain);
            println!("  Default course credits:   {}", settings.default_credits);
            println!("  Backups kept:             {}", settings.backup_retention);
            false
        }
        None => {
            println!("CCRM - Campus course and records manager");
            println!();
            println!("Run 'ccrm --help' for usage information.");
            false
        }
    };

    if changed {
        storage.save_all(&engine)?;
        debug!("Saved records to {}", paths.data_dir().display());
    }

    Ok(())
}
