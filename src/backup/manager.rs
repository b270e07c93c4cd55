//! Snapshot creation, sizing and retention
//!
//! A snapshot is a plain directory named `backup_YYYYMMDD_HHMMSS`, created
//! next to the directory it copies. Names sort in creation order.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use log::{debug, info, warn};
use serde::Serialize;
use walkdir::WalkDir;

use crate::config::paths::CcrmPaths;
use crate::error::{CcrmError, CcrmResult};

/// Directory name prefix for snapshots
pub const SNAPSHOT_PREFIX: &str = "backup_";

/// chrono format of the timestamp suffix
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Metadata about a snapshot
#[derive(Debug, Clone, Serialize)]
pub struct BackupInfo {
    /// Directory name
    pub name: String,
    pub path: PathBuf,
    /// When the snapshot was taken, parsed from the name
    pub created_at: NaiveDateTime,
    pub size_bytes: u64,
}

/// Copy `source` into a new timestamped sibling directory
///
/// Returns `None` when `source` does not exist, since there is nothing to
/// back up.
pub fn backup(source: &Path) -> CcrmResult<Option<PathBuf>> {
    if !source.is_dir() {
        info!("{} does not exist, nothing to back up", source.display());
        return Ok(None);
    }

    let parent = source.parent().unwrap_or_else(|| Path::new("."));
    let name = format!("{}{}", SNAPSHOT_PREFIX, Local::now().format(TIMESTAMP_FORMAT));
    let destination = parent.join(name);

    let copied = mirror(source, &destination)?;
    info!(
        "Backed up {} file(s) from {} to {}",
        copied,
        source.display(),
        destination.display()
    );
    Ok(Some(destination))
}

/// Recursively copy every file and directory under `source` into
/// `destination`, overwriting files that already exist there
///
/// Returns the number of files copied.
pub(crate) fn mirror(source: &Path, destination: &Path) -> CcrmResult<usize> {
    fs::create_dir_all(destination).map_err(|e| {
        CcrmError::Io(format!(
            "Failed to create {}: {}",
            destination.display(),
            e
        ))
    })?;

    let mut copied = 0;
    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| CcrmError::Io(e.to_string()))?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| {
                CcrmError::Io(format!("Failed to create {}: {}", target.display(), e))
            })?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target).map_err(|e| {
                CcrmError::Io(format!(
                    "Failed to copy {} to {}: {}",
                    entry.path().display(),
                    target.display(),
                    e
                ))
            })?;
            debug!("Copied {}", relative.display());
            copied += 1;
        }
    }

    Ok(copied)
}

/// Total bytes of every regular file under `dir`
///
/// A file whose size cannot be read counts as zero and the walk goes on.
pub fn size_of(dir: &Path) -> CcrmResult<u64> {
    if !dir.exists() {
        return Err(CcrmError::Io(format!("{} does not exist", dir.display())));
    }

    let mut total = 0;
    for entry in WalkDir::new(dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.metadata() {
            Ok(metadata) => total += metadata.len(),
            Err(e) => warn!("Could not read size of {}: {}", entry.path().display(), e),
        }
    }

    Ok(total)
}

/// Snapshots found directly under `parent`, newest first
pub fn list_snapshots(parent: &Path) -> CcrmResult<Vec<BackupInfo>> {
    if !parent.exists() {
        return Ok(Vec::new());
    }

    let mut snapshots = Vec::new();

    for entry in fs::read_dir(parent)
        .map_err(|e| CcrmError::Io(format!("Failed to read backup directory: {}", e)))?
    {
        let entry = entry
            .map_err(|e| CcrmError::Io(format!("Failed to read directory entry: {}", e)))?;

        let path = entry.path();
        if path.is_dir() {
            if let Some(info) = parse_backup_info(&path) {
                snapshots.push(info);
            }
        }
    }

    // Sort by date, newest first
    snapshots.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(snapshots)
}

/// Delete all but the newest `keep` snapshots under `parent`
///
/// Returns the deleted paths.
pub fn enforce_retention(parent: &Path, keep: usize) -> CcrmResult<Vec<PathBuf>> {
    let mut deleted = Vec::new();

    for snapshot in list_snapshots(parent)?.into_iter().skip(keep) {
        fs::remove_dir_all(&snapshot.path)
            .map_err(|e| CcrmError::Io(format!("Failed to delete old backup: {}", e)))?;
        info!("Removed old backup {}", snapshot.name);
        deleted.push(snapshot.path);
    }

    Ok(deleted)
}

fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let name = path.file_name()?.to_string_lossy().to_string();
    let created_at = parse_snapshot_name(&name)?;

    let size_bytes = match size_of(path) {
        Ok(size) => size,
        Err(e) => {
            warn!("Could not size {}: {}", path.display(), e);
            0
        }
    };

    Some(BackupInfo {
        name,
        path: path.to_path_buf(),
        created_at,
        size_bytes,
    })
}

/// Parse the timestamp out of a `backup_YYYYMMDD_HHMMSS` name
pub(crate) fn parse_snapshot_name(name: &str) -> Option<NaiveDateTime> {
    let stamp = name.strip_prefix(SNAPSHOT_PREFIX)?;
    NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()
}

/// Creates and prunes snapshots of the data directory
pub struct BackupManager {
    data_dir: PathBuf,
    /// Where snapshots live: the data directory's parent
    backup_root: PathBuf,
    retention: usize,
}

impl BackupManager {
    pub fn new(paths: &CcrmPaths, retention: usize) -> Self {
        Self {
            data_dir: paths.data_dir(),
            backup_root: paths.base_dir().clone(),
            retention,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn backup_root(&self) -> &Path {
        &self.backup_root
    }

    /// Snapshot the data directory
    pub fn create_backup(&self) -> CcrmResult<Option<PathBuf>> {
        backup(&self.data_dir)
    }

    /// Snapshot the data directory and then enforce the retention count
    pub fn create_backup_with_retention(&self) -> CcrmResult<(Option<PathBuf>, Vec<PathBuf>)> {
        let created = self.create_backup()?;
        let deleted = self.enforce_retention()?;
        Ok((created, deleted))
    }

    pub fn list_backups(&self) -> CcrmResult<Vec<BackupInfo>> {
        list_snapshots(&self.backup_root)
    }

    pub fn enforce_retention(&self) -> CcrmResult<Vec<PathBuf>> {
        enforce_retention(&self.backup_root, self.retention)
    }

    /// Look up a snapshot by directory name
    pub fn get_backup(&self, name: &str) -> CcrmResult<Option<BackupInfo>> {
        let path = self.backup_root.join(name);
        if path.is_dir() {
            Ok(parse_backup_info(&path))
        } else {
            Ok(None)
        }
    }

    pub fn get_latest_backup(&self) -> CcrmResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }

    /// Bytes currently held in the data directory
    pub fn data_size(&self) -> CcrmResult<u64> {
        size_of(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use tempfile::TempDir;

    fn data_dir_with_files(root: &Path) -> PathBuf {
        let data = root.join("data");
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join("students.csv"), "0123456789").unwrap();
        fs::write(data.join("courses.csv"), "01234567890123456789").unwrap();
        data
    }

    #[test]
    fn test_backup_mirrors_tree_and_sizes_match() {
        let temp_dir = TempDir::new().unwrap();
        let data = data_dir_with_files(temp_dir.path());

        let snapshot = backup(&data).unwrap().unwrap();
        assert_eq!(snapshot.parent(), Some(temp_dir.path()));
        assert!(snapshot
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("backup_"));
        assert_eq!(
            fs::read_to_string(snapshot.join("students.csv")).unwrap(),
            "0123456789"
        );
        assert_eq!(size_of(&snapshot).unwrap(), 30);
        assert_eq!(size_of(&data).unwrap(), 30);
    }

    #[test]
    fn test_backup_of_missing_source_is_none() {
        let temp_dir = TempDir::new().unwrap();
        assert!(backup(&temp_dir.path().join("absent")).unwrap().is_none());
    }

    #[test]
    fn test_mirror_recurses_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("src");
        fs::create_dir_all(source.join("nested/deeper")).unwrap();
        fs::write(source.join("nested/deeper/file.txt"), "new").unwrap();

        let dest = temp_dir.path().join("dest");
        fs::create_dir_all(dest.join("nested/deeper")).unwrap();
        fs::write(dest.join("nested/deeper/file.txt"), "old contents").unwrap();

        assert_eq!(mirror(&source, &dest).unwrap(), 1);
        assert_eq!(
            fs::read_to_string(dest.join("nested/deeper/file.txt")).unwrap(),
            "new"
        );
    }

    #[test]
    fn test_size_of_counts_nested_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("a/b")).unwrap();
        fs::write(temp_dir.path().join("a/one"), [0u8; 5]).unwrap();
        fs::write(temp_dir.path().join("a/b/two"), [0u8; 7]).unwrap();

        assert_eq!(size_of(temp_dir.path()).unwrap(), 12);
        assert!(size_of(&temp_dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_parse_snapshot_name() {
        let ts = parse_snapshot_name("backup_20251127_143022").unwrap();
        assert_eq!(ts.year(), 2025);
        assert_eq!(ts.month(), 11);
        assert_eq!(ts.day(), 27);
        assert_eq!(ts.hour(), 14);

        assert!(parse_snapshot_name("data").is_none());
        assert!(parse_snapshot_name("backup_2025").is_none());
    }

    #[test]
    fn test_list_snapshots_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["backup_20240101_000000", "backup_20250301_120000", "backup_20241231_235959"] {
            fs::create_dir_all(temp_dir.path().join(name)).unwrap();
        }
        fs::create_dir_all(temp_dir.path().join("data")).unwrap();

        let names: Vec<_> = list_snapshots(temp_dir.path())
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "backup_20250301_120000",
                "backup_20241231_235959",
                "backup_20240101_000000"
            ]
        );
    }

    #[test]
    fn test_retention_policy() {
        let temp_dir = TempDir::new().unwrap();
        for day in 1..=5 {
            let name = format!("backup_202501{:02}_080000", day);
            fs::create_dir_all(temp_dir.path().join(name)).unwrap();
        }

        let deleted = enforce_retention(temp_dir.path(), 3).unwrap();
        assert_eq!(deleted.len(), 2);
        assert!(!temp_dir.path().join("backup_20250101_080000").exists());
        assert!(temp_dir.path().join("backup_20250105_080000").exists());
        assert_eq!(list_snapshots(temp_dir.path()).unwrap().len(), 3);
    }

    #[test]
    fn test_manager_uses_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CcrmPaths::with_base_dir(temp_dir.path().to_path_buf());
        data_dir_with_files(temp_dir.path());
        let manager = BackupManager::new(&paths, 10);

        assert!(manager.get_latest_backup().unwrap().is_none());
        let created = manager.create_backup().unwrap().unwrap();

        let latest = manager.get_latest_backup().unwrap().unwrap();
        assert_eq!(latest.path, created);
        assert_eq!(latest.size_bytes, 30);
        assert_eq!(manager.data_size().unwrap(), 30);
        assert!(manager.get_backup(&latest.name).unwrap().is_some());
    }
}
