//! Path utilities for determining data storage locations.
//!
//! The task file and the optional config file both live in `~/.task-cli/`.

use std::path::PathBuf;

/// The base directory name for task-cli data.
const DATA_DIR_NAME: &str = ".task-cli";

/// The task file name.
pub const STORE_FILENAME: &str = "tasks.json";

/// The config file name.
pub const CONFIG_FILENAME: &str = "config.yaml";

/// The GitHub events cache file name.
pub const EVENTS_FILENAME: &str = "events.json";

/// Get the base data directory for task-cli.
///
/// Returns `~/.task-cli/` or `None` if the home directory cannot be
/// determined.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR_NAME))
}

/// Get the default task file path, `~/.task-cli/tasks.json`.
#[must_use]
pub fn default_store_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(STORE_FILENAME))
}

/// Get the config file path, `~/.task-cli/config.yaml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(CONFIG_FILENAME))
}

/// Get the default GitHub events cache path, `~/.task-cli/events.json`.
#[must_use]
pub fn default_events_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join(EVENTS_FILENAME))
}
