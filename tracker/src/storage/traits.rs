//! Storage trait definitions.

use async_trait::async_trait;
use serde_json::Value;

use crate::entities::Task;
use crate::errors::TasksResult;

/// Raw record I/O for the task collection.
///
/// Implementations only move records in and out; skipping bad records and
/// degrading on failure is handled by [`super::load`] and [`super::save`].
#[async_trait]
pub trait Storage: Send + Sync {
    /// Get storage type identifier
    fn storage_type(&self) -> &'static str;

    /// Human-readable location, used in diagnostics
    fn location(&self) -> String;

    /// Read every persisted record, in stored order.
    ///
    /// A store that does not exist yet yields an empty list.
    async fn read_records(&self) -> TasksResult<Vec<Value>>;

    /// Replace the stored collection with `tasks`
    async fn write_tasks(&self, tasks: &[Task]) -> TasksResult<()>;
}
