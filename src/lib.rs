//! # `task_cli`
//!
//! A minimal personal task tracker: create, list, update, and delete short
//! task records persisted to a local JSON file. Also tracks a GitHub user's
//! recent public activity via the events API.

pub mod activity;
pub mod cli;
pub mod config;
pub mod error;
pub mod paths;
pub mod tasks;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
