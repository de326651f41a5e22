//! # Prompt Storage
//!
//! This module defines the storage seam of the crate.
//!
//! The main components are:
//! - [`PromptStore`] trait - Loads and saves the whole prompt collection
//! - [`StorageError`] - Failures surfaced by store implementations
//! - [`MemoryStorage`] - An in-process store, mostly useful in tests

use crate::prompt::Prompt;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize data for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid base path: {0}")]
    InvalidBasePath(String),
}

/// Whole-collection persistence for prompts.
///
/// Every call is a fresh full read or full write; implementations keep no
/// cache between calls.
pub trait PromptStore: Send + Sync {
    /// Loads the collection. A store that has never been written loads as empty.
    fn load(&self) -> Result<Vec<Prompt>>;

    /// Replaces the persisted collection with `prompts`.
    fn save(&self, prompts: &[Prompt]) -> Result<()>;

    /// Whether anything has been persisted yet.
    fn exists(&self) -> bool;
}

/// Keeps the collection in memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    prompts: Mutex<Option<Vec<Prompt>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompts(prompts: Vec<Prompt>) -> Self {
        Self {
            prompts: Mutex::new(Some(prompts)),
        }
    }
}

impl PromptStore for MemoryStorage {
    fn load(&self) -> Result<Vec<Prompt>> {
        let guard = self.prompts.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone().unwrap_or_default())
    }

    fn save(&self, prompts: &[Prompt]) -> Result<()> {
        let mut guard = self.prompts.lock().unwrap_or_else(|e| e.into_inner());
        *guard = Some(prompts.to_vec());
        Ok(())
    }

    fn exists(&self) -> bool {
        self.prompts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}
