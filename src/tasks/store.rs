//! Task store trait and JSON file implementation.

use crate::error::{Error, Result};
use crate::tasks::models::{Status, Task};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Trait for task storage operations.
///
/// All methods return a `Result` and may fail with I/O or validation errors.
#[allow(clippy::missing_errors_doc)]
pub trait TaskStore {
    /// Create a new task with the given description. Returns the created task.
    fn add(&self, description: &str) -> Result<Task>;

    /// List tasks in creation order, optionally restricted to one status.
    fn list(&self, status: Option<Status>) -> Result<Vec<Task>>;

    /// Replace a task's description.
    fn update(&self, id: u64, description: &str) -> Result<Task>;

    /// Set a task's status.
    fn set_status(&self, id: u64, status: Status) -> Result<Task>;

    /// Delete a task by id.
    fn delete(&self, id: u64) -> Result<()>;
}

/// JSON-file-backed task store.
///
/// The store holds only the path to the task file. Every operation performs
/// a full load, one in-memory mutation, and a full save. There is no locking;
/// concurrent invocations race on the file and the last save wins.
#[derive(Debug, Clone)]
pub struct JsonTaskStore {
    /// Path to the JSON task file.
    file_path: PathBuf,
}

impl JsonTaskStore {
    /// Create a store for the given task file path.
    ///
    /// The file is not touched until the first mutation.
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self { file_path: file_path.into() }
    }

    /// Get the task file path.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Read the full task list from disk.
    ///
    /// An absent or empty file yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `CorruptStore` if the file is present but unparseable, or an
    /// I/O error if it cannot be read.
    pub fn load(&self) -> Result<Vec<Task>> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content)
            .map_err(|source| Error::CorruptStore { path: self.file_path.clone(), source })
    }

    /// Write the full task list to disk, replacing the previous contents.
    ///
    /// Writes to a temporary file in the same directory and renames it over
    /// the task file, so a failed save leaves the prior state untouched.
    fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut json = serde_json::to_string_pretty(tasks)?;
        json.push('\n');

        let tmp_path = self.file_path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.file_path)?;
        Ok(())
    }

    /// Next id to assign: max existing id + 1, or 1 for an empty store.
    fn next_id(tasks: &[Task]) -> u64 {
        tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
    }

    /// Reject empty or whitespace-only descriptions.
    fn validate_description(description: &str) -> Result<()> {
        if description.trim().is_empty() {
            return Err(Error::Validation("description must not be empty".to_string()));
        }
        Ok(())
    }
}

impl TaskStore for JsonTaskStore {
    fn add(&self, description: &str) -> Result<Task> {
        Self::validate_description(description)?;

        let mut tasks = self.load()?;
        let task = Task::new(Self::next_id(&tasks), description);
        tasks.push(task.clone());
        self.save(&tasks)?;
        Ok(task)
    }

    fn list(&self, status: Option<Status>) -> Result<Vec<Task>> {
        let mut tasks = self.load()?;
        if let Some(status) = status {
            tasks.retain(|t| t.status == status);
        }
        Ok(tasks)
    }

    fn update(&self, id: u64, description: &str) -> Result<Task> {
        Self::validate_description(description)?;

        let mut tasks = self.load()?;
        let task = tasks.iter_mut().find(|t| t.id == id).ok_or(Error::NotFound(id))?;
        task.description = description.to_string();
        task.touch();
        let updated = task.clone();
        self.save(&tasks)?;
        Ok(updated)
    }

    fn set_status(&self, id: u64, status: Status) -> Result<Task> {
        let mut tasks = self.load()?;
        let task = tasks.iter_mut().find(|t| t.id == id).ok_or(Error::NotFound(id))?;
        task.status = status;
        task.touch();
        let updated = task.clone();
        self.save(&tasks)?;
        Ok(updated)
    }

    fn delete(&self, id: u64) -> Result<()> {
        let mut tasks = self.load()?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Err(Error::NotFound(id));
        }
        self.save(&tasks)?;
        Ok(())
    }
}
