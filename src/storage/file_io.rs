//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CcrmError;

/// How a save treats an existing destination file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Replace the file contents atomically
    #[default]
    Overwrite,
    /// Add to the end of the file, creating it if missing
    Append,
}

/// Write bytes to a file using the given mode
pub fn write_bytes<P: AsRef<Path>>(
    path: P,
    data: &[u8],
    mode: WriteMode,
) -> Result<(), CcrmError> {
    match mode {
        WriteMode::Overwrite => write_atomic(path, data),
        WriteMode::Append => append(path.as_ref(), data),
    }
}

/// Read a JSON file, returning the default value if it doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, CcrmError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| CcrmError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| CcrmError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write a value as pretty-printed JSON, atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), CcrmError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let json = serde_json::to_vec_pretty(data)
        .map_err(|e| CcrmError::Json(format!("Failed to serialize data: {}", e)))?;
    write_atomic(path, &json)
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<(), CcrmError> {
    let path = path.as_ref();
    ensure_parent(path)?;

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = temp_path_for(path)?;

    let file = File::create(&temp_path)
        .map_err(|e| CcrmError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(data)
        .map_err(|e| CcrmError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| CcrmError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| CcrmError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CcrmError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn append(path: &Path, data: &[u8]) -> Result<(), CcrmError> {
    ensure_parent(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CcrmError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    file.write_all(data)
        .map_err(|e| CcrmError::Storage(format!("Failed to append to {}: {}", path.display(), e)))?;

    file.flush()
        .map_err(|e| CcrmError::Storage(format!("Failed to flush {}: {}", path.display(), e)))
}

fn ensure_parent(path: &Path) -> Result<(), CcrmError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                CcrmError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> Result<PathBuf, CcrmError> {
    let file_name = path.file_name().ok_or_else(|| {
        CcrmError::Storage(format!("Not a file path: {}", path.display()))
    })?;
    let mut temp_name = OsString::from(file_name);
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}
