//! # File Storage
//!
//! This module provides functionality for storing and retrieving prompts from the local filesystem.
//! The whole collection lives in a single pretty-printed JSON document.
//!
//! The main component of this module is the [`FileStorage`] struct, which implements the
//! [`PromptStore`] trait on top of the generic JSON helpers [`read_json`], [`write_json`]
//! and [`file_exists`].
//!
//! # Examples
//!
//! ```rust
//! use shelf_core::file_storage::FileStorage;
//! use shelf_core::storage::PromptStore;
//! use tempfile::TempDir;
//!
//! let temp_dir = TempDir::new().unwrap();
//! let storage = FileStorage::new(temp_dir.path().join("data").join("prompts.json"));
//!
//! // Nothing written yet: the collection loads as empty
//! assert!(storage.load().unwrap().is_empty());
//!
//! storage.save(&[]).expect("Failed to save prompts");
//! assert!(storage.exists());
//! ```

use crate::prompt::Prompt;
use crate::storage::{PromptStore, Result, StorageError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::fs::create_dir_all;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Reads and deserializes the JSON document at `path`.
///
/// # Returns
///
/// * `Ok(None)` - If there is no file at `path`.
/// * `Ok(Some(value))` - If the file was read and parsed.
/// * `StorageError::Read` / `StorageError::Parse` - For any other failure.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&data)
        .map(Some)
        .map_err(|source| StorageError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Serializes `value` as pretty JSON and writes it to `path`.
///
/// Missing parent directories are created first. The data is written to a
/// temporary file next to the target and then renamed over it, so readers
/// see either the old document or the new one.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let serialized = serde_json::to_string_pretty(value).map_err(|source| StorageError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source: io::Error| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    create_dir_all(parent).map_err(write_err)?;

    let mut temp_file = NamedTempFile::new_in(parent).map_err(write_err)?;
    temp_file.write_all(serialized.as_bytes()).map_err(write_err)?;
    temp_file.write_all(b"\n").map_err(write_err)?;
    temp_file.as_file().sync_all().map_err(write_err)?;
    temp_file.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

/// Whether anything exists at `path`. Never fails.
pub fn file_exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

/// Creates every directory in `paths` (recursively) if it is missing.
///
/// Fails with `StorageError::InvalidBasePath` when a path exists but is not a directory.
pub fn ensure_directories<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        if !path.exists() {
            create_dir_all(path).map_err(|source| StorageError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "created directory");
        } else if !path.is_dir() {
            return Err(StorageError::InvalidBasePath(path.display().to_string()));
        }
    }
    Ok(())
}

/// A local file storage for Prompts.
///
/// Saves the whole collection as one JSON array.
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// The JSON document holding the collection.
    pub path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PromptStore for FileStorage {
    /// Loads every prompt from the document.
    ///
    /// A missing document is an empty collection, not an error.
    fn load(&self) -> Result<Vec<Prompt>> {
        let prompts: Vec<Prompt> = read_json(&self.path)?.unwrap_or_default();
        tracing::debug!(path = %self.path.display(), count = prompts.len(), "loaded prompts");
        Ok(prompts)
    }

    /// Overwrites the document with `prompts`.
    fn save(&self, prompts: &[Prompt]) -> Result<()> {
        write_json(&self.path, prompts)?;
        tracing::debug!(path = %self.path.display(), count = prompts.len(), "saved prompts");
        Ok(())
    }

    fn exists(&self) -> bool {
        file_exists(&self.path)
    }
}
