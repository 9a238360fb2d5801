//! Domain facades for task tracking.
//!
//! These facades combine storage operations with the tracker's rules.

mod config;
mod tasks;

pub use config::{ConfigDomain, CONFIG_DIR};
pub use tasks::{TaskChanges, TaskFilter, TaskManager};
