//! Backup CLI commands
//!
//! Implements CLI commands for snapshot management.

use clap::Subcommand;
use std::path::PathBuf;

use crate::backup::{size_of, BackupManager, RestoreManager};
use crate::config::paths::CcrmPaths;
use crate::config::settings::Settings;
use crate::display::format_size;
use crate::error::{CcrmError, CcrmResult};

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Snapshot the data directory
    Create,

    /// List all available snapshots
    List {
        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Total size in bytes of a directory tree
    Size {
        /// Directory to measure; defaults to the data directory
        dir: Option<PathBuf>,
    },

    /// Restore the data directory from a snapshot
    Restore {
        /// Snapshot name or path (use 'latest' for most recent)
        backup: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a backup command
///
/// Snapshots and restores work on the files on disk, never on the loaded
/// record set.
pub fn handle_backup_command(
    paths: &CcrmPaths,
    settings: &Settings,
    cmd: BackupCommands,
) -> CcrmResult<()> {
    let manager = BackupManager::new(paths, settings.backup_retention);

    match cmd {
        BackupCommands::Create => {
            println!("Creating backup...");
            let (created, pruned) = manager.create_backup_with_retention()?;
            match created {
                Some(path) => {
                    println!("Backup created: {}", path.display());
                    println!("Size: {}", format_size(size_of(&path)?));
                }
                None => println!("Nothing to back up."),
            }
            if !pruned.is_empty() {
                println!("Removed {} old backup(s).", pruned.len());
            }
        }

        BackupCommands::List { verbose } => {
            let backups = manager.list_backups()?;

            if backups.is_empty() {
                println!("No backups found.");
                println!("Create one with: ccrm backup create");
                return Ok(());
            }

            println!("Available Backups");
            println!("=================");
            println!();

            for (i, backup) in backups.iter().enumerate() {
                if verbose {
                    println!(
                        "{}. {}\n   Created: {}\n   Size: {}\n   Path: {}\n",
                        i + 1,
                        backup.name,
                        backup.created_at.format("%Y-%m-%d %H:%M:%S"),
                        format_size(backup.size_bytes),
                        backup.path.display(),
                    );
                } else {
                    println!(
                        "  {}. {} ({})",
                        i + 1,
                        backup.name,
                        format_size(backup.size_bytes),
                    );
                }
            }

            println!();
            println!("Total: {} backup(s)", backups.len());
        }

        BackupCommands::Size { dir } => {
            let dir = dir.unwrap_or_else(|| paths.data_dir());
            println!("{}", size_of(&dir)?);
        }

        BackupCommands::Restore { backup, force } => {
            let backup_path = resolve_backup_path(&manager, &backup)?;

            let restore_manager = RestoreManager::new(paths.clone());
            let validation = restore_manager.validate_snapshot(&backup_path)?;

            println!("Backup Information");
            println!("==================");
            println!("Path: {}", backup_path.display());
            if let Some(date) = validation.snapshot_date {
                println!("Created: {}", date.format("%Y-%m-%d %H:%M:%S"));
            }
            println!("Size: {}", format_size(validation.size_bytes));
            println!("Status: {}", validation.summary());
            println!();

            if !force {
                println!("WARNING: This will overwrite ALL current data!");
                println!("To proceed, run again with --force flag:");
                println!("  ccrm backup restore {} --force", backup);
                return Ok(());
            }

            println!("Restoring from backup...");
            let result = restore_manager.restore_from_snapshot(&backup_path)?;
            println!("Restore complete!");
            println!("{}", result.summary());
        }
    }

    Ok(())
}

/// Resolve a snapshot identifier to a full path
fn resolve_backup_path(manager: &BackupManager, backup: &str) -> CcrmResult<PathBuf> {
    // Handle "latest" keyword
    if backup.eq_ignore_ascii_case("latest") {
        return manager
            .get_latest_backup()?
            .map(|b| b.path)
            .ok_or_else(|| CcrmError::NotFound {
                entity_type: "Backup",
                identifier: "latest".to_string(),
            });
    }

    // Check if it's a snapshot name next to the data directory
    if let Some(info) = manager.get_backup(backup)? {
        return Ok(info.path);
    }

    // Check if it's a full path
    let path = PathBuf::from(backup);
    if path.is_dir() {
        return Ok(path);
    }

    Err(CcrmError::NotFound {
        entity_type: "Backup",
        identifier: backup.to_string(),
    })
}
