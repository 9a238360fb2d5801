//! Configuration entities.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::TasksError;

/// Main configuration structure, stored as `.tracker/config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Path of the tasks file, relative paths resolve against the project
    #[serde(default = "default_tasks_file", rename = "tasksFile")]
    pub tasks_file: PathBuf,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level", rename = "logLevel")]
    pub log_level: String,

    /// How listings are printed
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_tasks_file() -> PathBuf {
    PathBuf::from("data.json")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tasks_file: default_tasks_file(),
            log_level: default_log_level(),
            output: OutputFormat::default(),
        }
    }
}

impl TrackerConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute location of the tasks file for a project root
    pub fn tasks_path(&self, project_path: &Path) -> PathBuf {
        if self.tasks_file.is_absolute() {
            self.tasks_file.clone()
        } else {
            project_path.join(&self.tasks_file)
        }
    }
}

/// Listing output style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Framed text blocks, one per task
    #[default]
    Text,
    /// A single table
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = TasksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "table" => Ok(Self::Table),
            _ => Err(TasksError::ConfigError {
                reason: format!("unknown output format '{s}', expected 'text' or 'table'"),
            }),
        }
    }
}
