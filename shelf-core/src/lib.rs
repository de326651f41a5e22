//! # shelf Core
//!
//! This crate provides the core functionality for the shelf prompt library.
//!
//! shelf keeps a personal collection of reusable prompts (for AI tools and the like) in a
//! single JSON document, and lets you create, tag, categorize, search and track the usage
//! of them.
//!
//! # Modules
//!
//! - [`catalog`] - Default categories and available tones
//! - [`error`] - Repository error type
//! - [`file_storage`] - JSON file storage for the prompt collection
//! - [`prompt`] - The prompt record and its create/patch input
//! - [`repository`] - CRUD, search and statistics over a store
//! - [`search`] - Filtering and sorting
//! - [`seed`] - Example prompts for an empty library
//! - [`stats`] - Aggregate statistics
//! - [`storage`] - The storage trait and an in-memory store
//!
//! # Examples
//!
//! ```rust
//! use shelf_core::file_storage::FileStorage;
//! use shelf_core::prompt::PromptInput;
//! use shelf_core::repository::PromptRepository;
//! use tempfile::TempDir;
//!
//! let temp_dir = TempDir::new().unwrap();
//! let repo = PromptRepository::new(FileStorage::new(temp_dir.path().join("prompts.json")));
//!
//! let prompt = repo
//!     .create(PromptInput {
//!         title: Some("Greeting".to_string()),
//!         content: Some("Hello, world!".to_string()),
//!         tags: Some(vec!["example".to_string()]),
//!         ..Default::default()
//!     })
//!     .expect("Failed to create prompt");
//!
//! let used = repo.increment_usage(&prompt.id).unwrap().unwrap();
//! assert_eq!(used.usage_count, 1);
//! ```

pub mod catalog;
pub mod error;
pub mod file_storage;
pub mod prompt;
pub mod repository;
pub mod search;
pub mod seed;
pub mod stats;
pub mod storage;
