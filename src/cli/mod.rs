//! Command-line interface for task-cli.
//!
//! This module defines the clap command surface; execution lives in
//! [`run`].

mod run;

pub use run::{run, CliOutput};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// task-cli - a minimal personal task tracker.
///
/// Tasks are stored in a single JSON file, by default
/// `~/.task-cli/tasks.json`. Use `--file` or the `store_path` entry in
/// `~/.task-cli/config.yaml` to point at a different file. The `activity`
/// commands track a GitHub user's recent public events.
#[derive(Parser, Debug)]
#[command(name = "task-cli")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Task file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a new task.
    ///
    /// The description may be given as multiple words; they are joined
    /// with spaces. New tasks start with status "todo".
    Add {
        /// Task description
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// List tasks in creation order.
    List {
        /// Filter by status: todo, in-progress, done
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Replace a task's description.
    Update {
        /// Task id
        id: u64,

        /// New description
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// Mark a task as in-progress.
    #[command(name = "mark-in-progress")]
    MarkInProgress {
        /// Task id
        id: u64,
    },

    /// Mark a task as done.
    #[command(name = "mark-done")]
    MarkDone {
        /// Task id
        id: u64,
    },

    /// Delete a task.
    Delete {
        /// Task id
        id: u64,
    },

    /// Track a GitHub user's recent public activity.
    Activity {
        /// What to do
        #[command(subcommand)]
        command: ActivityCommand,
    },

    /// Inspect or edit the config file.
    Config {
        /// What to do
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Show version information.
    Version,
}

/// GitHub activity subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ActivityCommand {
    /// Fetch recent public events for a user and cache them locally.
    Fetch {
        /// GitHub username
        username: String,

        /// Maximum number of events to fetch
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,

        /// Personal access token for authenticated requests
        #[arg(long)]
        token: Option<String>,

        /// Events file to use instead of the default location
        #[arg(long, value_name = "PATH")]
        cache: Option<PathBuf>,
    },

    /// Show previously fetched events without hitting the API.
    Cached {
        /// Maximum number of events to show
        #[arg(short = 'n', long, default_value_t = 10)]
        limit: usize,

        /// Events file to use instead of the default location
        #[arg(long, value_name = "PATH")]
        cache: Option<PathBuf>,
    },
}

/// Config file subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the config file location and the effective task file path.
    Show,

    /// Record a task file location in the config file.
    #[command(name = "set-store")]
    SetStore {
        /// Task file path to record
        path: PathBuf,
    },
}
