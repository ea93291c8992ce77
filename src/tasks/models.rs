//! Task model types for the task tracker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Task has not been started (default).
    #[default]
    Todo,
    /// Task is currently being worked on.
    InProgress,
    /// Task has been completed.
    Done,
}

impl Status {
    /// Parse a status from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid status.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, InvalidStatus> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(InvalidStatus(s.to_string())),
        }
    }

    /// Get the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid status string is provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidStatus(pub String);

impl std::fmt::Display for InvalidStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid status: '{}' (must be one of: todo, in-progress, done)", self.0)
    }
}

impl std::error::Error for InvalidStatus {}

/// A single tracked task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned monotonically (max existing id + 1).
    pub id: u64,
    /// What needs doing. Never empty.
    pub description: String,
    /// Current status.
    pub status: Status,
    /// When the task was created. Immutable.
    pub created_at: DateTime<Utc>,
    /// When the task was last modified. Refreshed on every mutation.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task with the given id and description, status `todo`,
    /// both timestamps set to now.
    #[must_use]
    pub fn new(id: u64, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self { id, description: description.into(), status: Status::Todo, created_at: now, updated_at: now }
    }

    /// Refresh `updated_at` to now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
