use crate::domain::DEFAULT_LABEL_COLOR;
use crate::error::{Result, TaskFlowError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Session configuration for the task board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaskFlowConfig {
    /// Key the persisted state blob is stored under
    pub storage_key: String,
    /// Name of the board created when no persisted state exists
    pub seed_board_name: String,
    /// Color of labels parsed from comma-separated text
    pub default_label_color: String,
}

impl Default for TaskFlowConfig {
    fn default() -> Self {
        Self {
            storage_key: "taskFlowState".to_string(),
            seed_board_name: "Welcome Board".to_string(),
            default_label_color: DEFAULT_LABEL_COLOR.to_string(),
        }
    }
}

impl TaskFlowConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| TaskFlowError::ConfigError(e.to_string()))?;
        if config.storage_key.trim().is_empty() {
            return Err(TaskFlowError::ConfigError(
                "storageKey must not be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Loads configuration from a JSON file, falling back to defaults when it is missing
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path).await?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = TaskFlowConfig::default();
        assert_eq!(config.storage_key, "taskFlowState");
        assert_eq!(config.seed_board_name, "Welcome Board");
        assert_eq!(config.default_label_color, "#7289da");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = TaskFlowConfig::from_json_str(r#"{"seedBoardName":"Inbox"}"#).unwrap();
        assert_eq!(config.seed_board_name, "Inbox");
        assert_eq!(config.storage_key, "taskFlowState");
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            TaskFlowConfig::from_json_str("{not json"),
            Err(TaskFlowError::ConfigError(_))
        ));
        assert!(matches!(
            TaskFlowConfig::from_json_str(r#"{"storageKey":"  "}"#),
            Err(TaskFlowError::ConfigError(_))
        ));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("taskflow.json");

        let config = TaskFlowConfig::load(&path).await.unwrap();
        assert_eq!(config, TaskFlowConfig::default());

        tokio::fs::write(&path, r##"{"defaultLabelColor":"#ff0000"}"##)
            .await
            .unwrap();
        let config = TaskFlowConfig::load(&path).await.unwrap();
        assert_eq!(config.default_label_color, "#ff0000");
    }
}
