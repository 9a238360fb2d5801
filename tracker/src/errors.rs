//! Error types for the tracker crate.

use thiserror::Error;

/// Errors raised by task validation, lookup and persistence
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TasksError {
    // Validation errors
    #[error("Task's deadline must have ISO 8601 format: YYYY-MM-DD (got '{value}')")]
    InvalidDeadline { value: String },

    #[error("Task's deadline must be in the future (got {deadline})")]
    DeadlineInPast { deadline: String },

    #[error("Task's priority must be one of [{allowed}] (got '{priority}')")]
    InvalidPriority { priority: String, allowed: String },

    #[error("Task's status must be one of [{allowed}] (got '{status}')")]
    InvalidStatus { status: String, allowed: String },

    // Lookup errors
    #[error("No task found with id {task_id}")]
    TaskNotFound { task_id: u64 },

    #[error("No tasks found")]
    NoTasksFound,

    #[error("No task ids left to assign")]
    IdsExhausted,

    // Storage errors
    #[error("Storage error: {reason}")]
    StorageError { reason: String },

    #[error("Failed to read file '{path}': {reason}")]
    FileReadError { path: String, reason: String },

    #[error("Failed to write file '{path}': {reason}")]
    FileWriteError { path: String, reason: String },

    #[error("Failed to parse JSON: {reason}")]
    JsonParseError { reason: String },

    // Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },
}

impl TasksError {
    /// Whether the error comes from rejected user input rather than I/O
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDeadline { .. }
                | Self::DeadlineInPast { .. }
                | Self::InvalidPriority { .. }
                | Self::InvalidStatus { .. }
        )
    }
}

impl From<std::io::Error> for TasksError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageError {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TasksError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParseError {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for tracker operations
pub type TasksResult<T> = Result<T, TasksError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TasksError::TaskNotFound { task_id: 9999 };
        assert_eq!(err.to_string(), "No task found with id 9999");
    }

    #[test]
    fn test_invalid_priority_lists_allowed_values() {
        let err = TasksError::InvalidPriority {
            priority: "urgent".to_string(),
            allowed: "Высокий, Средний, Низкий".to_string(),
        };
        let message = err.to_string();
        assert!(message.starts_with("Task's priority must be one of"));
        assert!(message.contains("Средний"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let tasks_err: TasksError = io_err.into();
        assert!(matches!(tasks_err, TasksError::StorageError { .. }));
        assert!(!tasks_err.is_validation());
    }
}
