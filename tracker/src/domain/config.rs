//! Configuration domain facade.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::entities::{OutputFormat, TrackerConfig};
use crate::errors::{TasksError, TasksResult};

/// Directory holding tracker metadata inside a project
pub const CONFIG_DIR: &str = ".tracker";

/// Configuration domain facade
pub struct ConfigDomain {
    config_path: PathBuf,
}

impl ConfigDomain {
    /// Create a new config domain for a project root
    pub fn new(project_path: impl AsRef<Path>) -> Self {
        Self {
            config_path: project_path.as_ref().join(CONFIG_DIR).join("config.json"),
        }
    }

    /// Path of the config file
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration, falling back to defaults when absent
    pub async fn load(&self) -> TasksResult<TrackerConfig> {
        match fs::read_to_string(&self.config_path).await {
            Ok(content) => serde_json::from_str(&content).map_err(|e| TasksError::ConfigError {
                reason: format!("{}: {e}", self.config_path.display()),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.config_path.display(), "No config file, using defaults");
                Ok(TrackerConfig::default())
            }
            Err(e) => Err(TasksError::FileReadError {
                path: self.config_path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Save configuration
    pub async fn save(&self, config: &TrackerConfig) -> TasksResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_path, content)
            .await
            .map_err(|e| TasksError::FileWriteError {
                path: self.config_path.display().to_string(),
                reason: e.to_string(),
            })
    }

    /// Point the project at a different tasks file
    pub async fn set_tasks_file(&self, tasks_file: impl Into<PathBuf>) -> TasksResult<()> {
        let mut config = self.load().await?;
        config.tasks_file = tasks_file.into();
        self.save(&config).await
    }

    /// Change the default listing style
    pub async fn set_output(&self, output: OutputFormat) -> TasksResult<()> {
        let mut config = self.load().await?;
        config.output = output;
        self.save(&config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_defaults_when_missing() {
        let temp = TempDir::new().unwrap();
        let domain = ConfigDomain::new(temp.path());

        let config = domain.load().await.unwrap();
        assert_eq!(config, TrackerConfig::default());
        assert!(!domain.config_path().exists());
    }

    #[tokio::test]
    async fn test_set_and_reload() {
        let temp = TempDir::new().unwrap();
        let domain = ConfigDomain::new(temp.path());

        domain.set_tasks_file("todo.json").await.unwrap();
        domain.set_output(OutputFormat::Table).await.unwrap();

        let config = domain.load().await.unwrap();
        assert_eq!(config.tasks_file, PathBuf::from("todo.json"));
        assert_eq!(config.output, OutputFormat::Table);
        assert_eq!(config.tasks_path(temp.path()), temp.path().join("todo.json"));
    }

    #[tokio::test]
    async fn test_malformed_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let domain = ConfigDomain::new(temp.path());
        fs::create_dir_all(temp.path().join(CONFIG_DIR)).await.unwrap();
        fs::write(domain.config_path(), "{ not json").await.unwrap();

        let err = domain.load().await.unwrap_err();
        assert!(matches!(err, TasksError::ConfigError { .. }));
    }
}
