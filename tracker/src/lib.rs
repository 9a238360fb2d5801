#![warn(clippy::pedantic)]
// Allow common pedantic lints that don't affect correctness
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::map_unwrap_or)]
#![allow(clippy::unnecessary_map_or)]

//! # Tracker
//!
//! A personal task tracker backed by a single JSON file.
//!
//! This crate provides:
//! - The [`Task`] entity with validated priority, status and deadline
//! - Whole-file persistence that skips bad records instead of failing
//! - [`TaskManager`] with filtering, creation, modification and deletion
//! - Text and table rendering for the `tracker` CLI
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tracker::{FileStorage, TaskFilter, TaskManager};
//!
//! let storage = Arc::new(FileStorage::new("data.json"));
//! let mut manager = TaskManager::open(storage).await;
//!
//! manager.create("fix bug", "in parser", "work", "2030-01-01", "высокий").await?;
//! let found = manager.filter(&TaskFilter::new().with_keywords(["parser"]));
//! println!("{}", tracker::ui::render(&found));
//! ```

// Core entities
pub mod entities;

// Error types
pub mod errors;

// Storage layer
pub mod storage;

// Domain facades
pub mod domain;

// Terminal UI helpers
pub mod ui;

// Re-export key types for convenience
pub use domain::{ConfigDomain, TaskChanges, TaskFilter, TaskManager};
pub use entities::{OutputFormat, Priority, Status, Task, TrackerConfig};
pub use errors::{TasksError, TasksResult};
pub use storage::{FileStorage, LoadedTasks, Storage};
