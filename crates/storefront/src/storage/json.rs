//! Whole-file JSON reads and atomic rewrites.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Result, StorageError};

/// Read a JSON array from `path`.
///
/// A missing file or one containing only whitespace reads as an empty list.
///
/// # Errors
///
/// Returns `StorageError::Io` if the file exists but cannot be read, or
/// `StorageError::Parse` if its content is not a valid list of `T`.
pub fn read_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "Data file not found, using empty list");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if content.trim().is_empty() {
        debug!(path = %path.display(), "Data file is empty, using empty list");
        return Ok(Vec::new());
    }

    serde_json::from_str(&content).map_err(|source| StorageError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace `path` with `value` serialized as indented JSON.
///
/// The data is written to a temp file in the same directory and renamed
/// over the target, so readers see either the old or the new content.
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns `StorageError` if serialization, the write or the rename fails.
pub fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).map_err(|source| StorageError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    let dir = parent_dir(path);
    let io_err = |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };

    fs::create_dir_all(&dir).map_err(io_err)?;

    let mut temp = NamedTempFile::new_in(&dir).map_err(io_err)?;
    temp.write_all(&bytes).map_err(io_err)?;
    temp.write_all(b"\n").map_err(io_err)?;
    temp.as_file().sync_all().map_err(io_err)?;

    temp.persist(path).map_err(|e| StorageError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    debug!(path = %path.display(), bytes = bytes.len(), "Data file written");
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
