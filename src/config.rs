//! Configuration management for task-cli.
//!
//! This module handles the optional `~/.task-cli/config.yaml` file, which can
//! point the tracker at a non-default task file. There are no environment
//! variables; the only other override is the `--file` CLI flag.

use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Path of the task file to use instead of the default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

impl Config {
    /// Load config from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(config_path: &Path) -> Result<Option<Self>> {
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(Some(config))
    }

    /// Save config to a specific file path, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }
}

/// Resolve the task file path to use.
///
/// Precedence: the `--file` CLI flag, then `store_path` from the config,
/// then the default `~/.task-cli/tasks.json`. Falls back to `tasks.json` in
/// the working directory when no home directory can be determined.
#[must_use]
pub fn resolve_store_path(cli_override: Option<&Path>, config: Option<&Config>) -> PathBuf {
    if let Some(path) = cli_override {
        return path.to_path_buf();
    }
    if let Some(path) = config.and_then(|c| c.store_path.clone()) {
        return path;
    }
    paths::default_store_path().unwrap_or_else(|| PathBuf::from(paths::STORE_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_config_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded = Config::load_from(&dir.path().join("config.yaml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("nested/config.yaml");

        let config = Config { store_path: Some(PathBuf::from("/data/tasks.json")) };
        config.save_to(&config_path).unwrap();

        let loaded = Config::load_from(&config_path).unwrap().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_malformed_config_is_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yaml");
        std::fs::write(&config_path, "store_path: [not, a, path, mapping: {").unwrap();

        assert!(Config::load_from(&config_path).is_err());
    }

    #[test]
    fn test_resolve_prefers_cli_flag() {
        let config = Config { store_path: Some(PathBuf::from("/from/config.json")) };
        let resolved = resolve_store_path(Some(Path::new("/from/flag.json")), Some(&config));
        assert_eq!(resolved, PathBuf::from("/from/flag.json"));
    }

    #[test]
    fn test_resolve_uses_config_without_flag() {
        let config = Config { store_path: Some(PathBuf::from("/from/config.json")) };
        let resolved = resolve_store_path(None, Some(&config));
        assert_eq!(resolved, PathBuf::from("/from/config.json"));
    }

    #[test]
    fn test_resolve_defaults_without_flag_or_config() {
        let resolved = resolve_store_path(None, None);
        assert!(resolved.to_string_lossy().ends_with(paths::STORE_FILENAME));
    }

    #[test]
    fn test_empty_config_has_no_store_path() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yaml");
        std::fs::write(&config_path, "{}").unwrap();

        let loaded = Config::load_from(&config_path).unwrap().unwrap();
        assert!(loaded.store_path.is_none());
    }
}
