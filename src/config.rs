use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::db::connection;
use crate::error::BoardError;
use crate::models::TagColor;

pub const DEFAULT_STORAGE_KEY: &str = "kanban-columns";

/// Settings read from `config.json` next to the board database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Key the board is stored under.
    pub storage_key: String,
    /// Color for `--tag NAME` when no color is given.
    pub default_tag_color: TagColor,
    /// Log filter used when neither `TASKBOARD_LOG` nor `-v` is set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_tag_color: TagColor::default(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load the repository's config. A missing file means defaults.
    pub fn load() -> Result<Self, BoardError> {
        Self::load_from(&connection::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, BoardError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| BoardError::config(format!("Cannot read {}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| BoardError::config(format!("Invalid config {}: {e}", path.display())))?;
        if config.storage_key.trim().is_empty() {
            return Err(BoardError::config("storage_key must not be empty"));
        }
        Ok(config)
    }

    /// Write the defaults unless a config already exists. Returns whether a
    /// file was written.
    pub fn write_default_if_missing(path: &Path) -> Result<bool, BoardError> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| BoardError::config(e.to_string()))?;
        }
        let body = serde_json::to_string_pretty(&Self::default())
            .map_err(|e| BoardError::config(e.to_string()))?;
        fs::write(path, body).map_err(|e| BoardError::config(e.to_string()))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.storage_key, "kanban-columns");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"default_tag_color":"teal"}"#).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_tag_color, TagColor::Teal);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"default_tag_color":"magenta"}"#).unwrap();
        assert_eq!(Config::load_from(&path).unwrap_err().code, ErrorCode::ConfigError);

        fs::write(&path, r#"{"storage_key":"  "}"#).unwrap();
        assert_eq!(Config::load_from(&path).unwrap_err().code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_write_default_only_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        assert!(Config::write_default_if_missing(&path).unwrap());
        assert!(!Config::write_default_if_missing(&path).unwrap());
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }
}
