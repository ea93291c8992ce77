//! Local cache of fetched GitHub events.

use crate::activity::models::Event;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON-file cache holding the most recently fetched events.
///
/// The cache is advisory: a missing or unreadable events file behaves like an
/// empty one, so a stale or damaged cache never blocks a fresh fetch.
#[derive(Debug, Clone)]
pub struct EventCache {
    file_path: PathBuf,
}

impl EventCache {
    /// Create a cache over the given events file. The file is not touched
    /// until `save` is called.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self { file_path: file_path.into() }
    }

    /// Get the events file path.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Read cached events, treating a missing or malformed file as empty.
    #[must_use]
    pub fn load(&self) -> Vec<Event> {
        let Ok(content) = fs::read_to_string(&self.file_path) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Replace the cache contents with the given events.
    ///
    /// Writes to a temporary file and renames it into place, same as the
    /// task file, so an interrupted write never corrupts the cache.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be written, or a JSON error
    /// if the events cannot be serialized.
    pub fn save(&self, events: &[Event]) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut json = serde_json::to_string_pretty(events)?;
        json.push('\n');

        let tmp_path = self.file_path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.file_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::models::Repo;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample_event() -> Event {
        Event {
            kind: "WatchEvent".to_string(),
            repo: Repo { name: "octocat/hello".to_string() },
            payload: json!({"action": "started"}),
            created_at: Some("2024-03-01T12:30:00Z".to_string()),
        }
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let cache = EventCache::new(dir.path().join("events.json"));
        assert!(cache.load().is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "{not json").unwrap();

        let cache = EventCache::new(path);
        assert!(cache.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let cache = EventCache::new(dir.path().join("events.json"));

        let events = vec![sample_event()];
        cache.save(&events).unwrap();

        assert_eq!(cache.load(), events);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let cache = EventCache::new(dir.path().join("nested/deeper/events.json"));

        cache.save(&[sample_event()]).unwrap();
        assert_eq!(cache.load().len(), 1);
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let cache = EventCache::new(dir.path().join("events.json"));

        cache.save(&[sample_event()]).unwrap();
        assert!(!dir.path().join("events.json.tmp").exists());
    }
}
