//! Configuration handling for the TUI

use crate::state::{ThemeMode, DEFAULT_NOTIFICATION_DURATION};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where submissions live for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process memory
    #[default]
    Memory,
    /// Per-session directory under the cache dir, removed on exit
    File,
}

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Start in dark mode (default true)
    pub dark_mode: Option<bool>,
    /// How long the success notification stays up
    pub notification_millis: Option<u64>,
    /// Session storage backend
    pub storage: Option<StorageBackend>,
}

impl TuiConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "loyalty", "loyalty-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn theme_mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.dark_mode.unwrap_or(true))
    }

    pub fn notification_duration(&self) -> Duration {
        self.notification_millis
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_NOTIFICATION_DURATION)
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.storage.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.dark_mode.is_none());
        assert!(config.notification_millis.is_none());
        assert!(config.storage.is_none());
        assert_eq!(config.theme_mode(), ThemeMode::Dark);
        assert_eq!(config.notification_duration(), Duration::from_millis(6000));
        assert_eq!(config.storage_backend(), StorageBackend::Memory);
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            dark_mode: Some(false),
            notification_millis: Some(1500),
            storage: Some(StorageBackend::File),
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"file\""));
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.theme_mode(), ThemeMode::Light);
        assert_eq!(parsed.notification_duration(), Duration::from_millis(1500));
        assert_eq!(parsed.storage_backend(), StorageBackend::File);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.dark_mode.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"dark_mode": false, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.dark_mode, Some(false));
    }

    #[test]
    fn test_unknown_storage_backend_is_rejected() {
        let json = r#"{"storage": "cloud"}"#;
        assert!(serde_json::from_str::<TuiConfig>(json).is_err());
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.dark_mode.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = TuiConfig {
            dark_mode: Some(false),
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        let loaded = TuiConfig::load_from(&path).unwrap();
        assert_eq!(loaded.dark_mode, Some(false));
    }

    #[test]
    fn test_load_from_invalid_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(TuiConfig::load_from(&path).is_err());
    }
}
