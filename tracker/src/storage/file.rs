//! File-based storage implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tracing::{debug, warn};

use super::traits::Storage;
use crate::entities::Task;
use crate::errors::{TasksError, TasksResult};

/// Stores the task collection as a single pretty-printed JSON array
pub struct FileStorage {
    /// Path to the tasks file
    tasks_file: PathBuf,
}

impl FileStorage {
    /// Create a new file storage instance over `tasks_file`
    pub fn new(tasks_file: impl AsRef<Path>) -> Self {
        Self {
            tasks_file: tasks_file.as_ref().to_path_buf(),
        }
    }

    /// Get the tasks file path
    pub fn tasks_file(&self) -> &Path {
        &self.tasks_file
    }

    /// Read the tasks file, `None` when it does not exist
    async fn read_tasks_file(&self) -> TasksResult<Option<String>> {
        match fs::read_to_string(&self.tasks_file).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TasksError::FileReadError {
                path: self.tasks_file.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Overwrite the tasks file
    async fn write_tasks_file(&self, content: &str) -> TasksResult<()> {
        if let Some(parent) = self.tasks_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        fs::write(&self.tasks_file, content)
            .await
            .map_err(|e| TasksError::FileWriteError {
                path: self.tasks_file.display().to_string(),
                reason: e.to_string(),
            })
    }
}

#[async_trait]
impl Storage for FileStorage {
    fn storage_type(&self) -> &'static str {
        "file"
    }

    fn location(&self) -> String {
        self.tasks_file.display().to_string()
    }

    async fn read_records(&self) -> TasksResult<Vec<Value>> {
        let Some(content) = self.read_tasks_file().await? else {
            warn!(path = %self.tasks_file.display(), "Tasks file not found, starting empty");
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Value>(&content)? {
            Value::Array(records) => {
                debug!(count = records.len(), path = %self.tasks_file.display(), "Read task records");
                Ok(records)
            }
            other => Err(TasksError::JsonParseError {
                reason: format!("expected an array of tasks, found {}", json_kind(&other)),
            }),
        }
    }

    async fn write_tasks(&self, tasks: &[Task]) -> TasksResult<()> {
        let mut content = serde_json::to_string_pretty(tasks)?;
        content.push('\n');
        self.write_tasks_file(&content).await?;
        debug!(count = tasks.len(), path = %self.tasks_file.display(), "Wrote tasks file");
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
