//! Error types for `task_cli`.

use std::path::PathBuf;

/// Errors that can occur while operating on the task store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An I/O error occurred reading or writing the task file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input failed validation (empty description, invalid status value).
    #[error("{0}")]
    Validation(String),

    /// An operation referenced a task id that does not exist.
    #[error("task not found: {0}")]
    NotFound(u64),

    /// The task file exists but does not parse as a task list.
    #[error("task file is corrupt: {path}: {source}")]
    CorruptStore {
        /// Path of the unparseable file.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The config file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// The GitHub API reported that a user does not exist.
    #[error("user {0} not found")]
    UserNotFound(String),

    /// The GitHub API refused the request (rate limit or forbidden).
    #[error("API rate limit exceeded or access forbidden (403); try again with --token")]
    RateLimited,

    /// An HTTP request failed or returned an unusable response.
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<crate::tasks::InvalidStatus> for Error {
    fn from(err: crate::tasks::InvalidStatus) -> Self {
        Self::Validation(err.to_string())
    }
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
