//! Command execution for the CLI.
//!
//! This module handles running CLI commands and producing output. All store
//! errors are caught here, stringified, and mapped to a non-zero exit code.

use crate::activity::{render_events, EventCache, GithubClient};
use crate::cli::{ActivityCommand, Cli, Command, ConfigCommand};
use crate::config::{self, Config};
use crate::error::Result;
use crate::paths;
use crate::tasks::{JsonTaskStore, Status, Task, TaskStore};
use std::path::{Path, PathBuf};

/// Output from running the CLI, with separate stdout and stderr messages.
#[derive(Debug)]
pub struct CliOutput {
    /// Exit code for the process.
    pub exit_code: u8,
    /// Messages to print to stdout.
    pub stdout: Vec<String>,
    /// Messages to print to stderr.
    pub stderr: Vec<String>,
}

/// Run a CLI invocation.
#[must_use]
pub fn run(cli: Cli) -> CliOutput {
    let Cli { file, config, command } = cli;
    let config_path = config
        .or_else(paths::config_path)
        .unwrap_or_else(|| PathBuf::from(paths::CONFIG_FILENAME));
    let file = file.as_deref();

    match command {
        Command::Add { description } => {
            with_store(file, &config_path, |s| cmd_add(s, &description.join(" ")))
        }
        Command::List { status } => {
            with_store(file, &config_path, |s| cmd_list(s, status.as_deref()))
        }
        Command::Update { id, description } => {
            with_store(file, &config_path, |s| cmd_update(s, id, &description.join(" ")))
        }
        Command::MarkInProgress { id } => {
            with_store(file, &config_path, |s| cmd_set_status(s, id, Status::InProgress))
        }
        Command::MarkDone { id } => {
            with_store(file, &config_path, |s| cmd_set_status(s, id, Status::Done))
        }
        Command::Delete { id } => with_store(file, &config_path, |s| cmd_delete(s, id)),
        Command::Activity { command } => run_activity_cmd(command),
        Command::Config { command } => run_config_cmd(command, &config_path, file),
        Command::Version => run_version(),
    }
}

fn run_version() -> CliOutput {
    success_output(format!("task-cli v{}", crate::VERSION))
}

fn cmd_add(store: &JsonTaskStore, description: &str) -> CliOutput {
    match store.add(description) {
        Ok(task) => success_output(format!("Task added successfully (ID: {})", task.id)),
        Err(e) => error_output(e.to_string()),
    }
}

fn cmd_list(store: &JsonTaskStore, status: Option<&str>) -> CliOutput {
    match list_tasks(store, status) {
        Ok(tasks) if tasks.is_empty() => success_output("No tasks found.".to_string()),
        Ok(tasks) => CliOutput {
            exit_code: 0,
            stdout: tasks.iter().map(format_task).collect(),
            stderr: vec![],
        },
        Err(e) => error_output(e.to_string()),
    }
}

/// List tasks, parsing the status filter at the boundary.
fn list_tasks(store: &JsonTaskStore, status: Option<&str>) -> Result<Vec<Task>> {
    let status = status.map(Status::from_str).transpose()?;
    store.list(status)
}

fn cmd_update(store: &JsonTaskStore, id: u64, description: &str) -> CliOutput {
    match store.update(id, description) {
        Ok(task) => success_output(format!("Task {} updated.", task.id)),
        Err(e) => error_output(e.to_string()),
    }
}

fn cmd_set_status(store: &JsonTaskStore, id: u64, status: Status) -> CliOutput {
    match store.set_status(id, status) {
        Ok(task) => success_output(format!("Task {} marked {}.", task.id, task.status)),
        Err(e) => error_output(e.to_string()),
    }
}

fn cmd_delete(store: &JsonTaskStore, id: u64) -> CliOutput {
    match store.delete(id) {
        Ok(()) => success_output(format!("Task {id} deleted.")),
        Err(e) => error_output(e.to_string()),
    }
}

// === Activity Commands ===

fn run_activity_cmd(command: ActivityCommand) -> CliOutput {
    match command {
        ActivityCommand::Fetch { username, limit, token, cache } => {
            activity_fetch(&username, limit, token, cache)
        }
        ActivityCommand::Cached { limit, cache } => activity_cached(limit, cache),
    }
}

fn activity_fetch(
    username: &str,
    limit: usize,
    token: Option<String>,
    cache_override: Option<PathBuf>,
) -> CliOutput {
    let client = GithubClient::new(token);
    let events = match client.fetch_events(username, limit) {
        Ok(events) => events,
        Err(e) => return error_output(e.to_string()),
    };

    if events.is_empty() {
        return success_output("No events found.".to_string());
    }

    let mut stdout = render_events(&events);
    let cache = EventCache::new(resolve_events_path(cache_override));
    match cache.save(&events) {
        Ok(()) => {
            stdout.push(format!(
                "Saved {} events to {}",
                events.len(),
                cache.file_path().display()
            ));
            CliOutput { exit_code: 0, stdout, stderr: vec![] }
        }
        // A cache write failure is a warning; the events were still shown.
        Err(e) => CliOutput {
            exit_code: 0,
            stdout,
            stderr: vec![format!("Warning: could not save events: {e}")],
        },
    }
}

fn activity_cached(limit: usize, cache_override: Option<PathBuf>) -> CliOutput {
    let cache = EventCache::new(resolve_events_path(cache_override));
    let mut events = cache.load();
    events.truncate(limit);

    if events.is_empty() {
        return success_output("No events found.".to_string());
    }
    CliOutput { exit_code: 0, stdout: render_events(&events), stderr: vec![] }
}

// === Config Commands ===

fn run_config_cmd(
    command: ConfigCommand,
    config_path: &Path,
    file_override: Option<&Path>,
) -> CliOutput {
    match command {
        ConfigCommand::Show => config_show(config_path, file_override),
        ConfigCommand::SetStore { path } => config_set_store(config_path, &path),
    }
}

fn config_show(config_path: &Path, file_override: Option<&Path>) -> CliOutput {
    let config = match Config::load_from(config_path) {
        Ok(c) => c,
        Err(e) => return error_output(e.to_string()),
    };
    let store_path = config::resolve_store_path(file_override, config.as_ref());
    CliOutput {
        exit_code: 0,
        stdout: vec![
            format!("config file: {}", config_path.display()),
            format!("task file: {}", store_path.display()),
        ],
        stderr: vec![],
    }
}

fn config_set_store(config_path: &Path, store_path: &Path) -> CliOutput {
    let mut config = match Config::load_from(config_path) {
        Ok(c) => c.unwrap_or_default(),
        Err(e) => return error_output(e.to_string()),
    };
    config.store_path = Some(store_path.to_path_buf());

    match config.save_to(config_path) {
        Ok(()) => success_output(format!("Task file path set to {}", store_path.display())),
        Err(e) => error_output(e.to_string()),
    }
}

// === Helper Functions ===

fn with_store(
    file_override: Option<&Path>,
    config_path: &Path,
    f: impl FnOnce(&JsonTaskStore) -> CliOutput,
) -> CliOutput {
    match open_store(file_override, config_path) {
        Ok(store) => f(&store),
        Err(e) => error_output(e),
    }
}

fn open_store(
    file_override: Option<&Path>,
    config_path: &Path,
) -> std::result::Result<JsonTaskStore, String> {
    // The config file is only consulted when the CLI flag is absent.
    let config = if file_override.is_some() {
        None
    } else {
        Config::load_from(config_path).map_err(|e| e.to_string())?
    };
    let path = config::resolve_store_path(file_override, config.as_ref());
    Ok(JsonTaskStore::new(path))
}

fn resolve_events_path(cache_override: Option<PathBuf>) -> PathBuf {
    cache_override
        .or_else(paths::default_events_path)
        .unwrap_or_else(|| PathBuf::from(paths::EVENTS_FILENAME))
}

/// One listing line: id, bracketed status, description.
fn format_task(task: &Task) -> String {
    format!("{:>4}  [{}]  {}", task.id, task.status, task.description)
}

fn success_output(message: String) -> CliOutput {
    CliOutput { exit_code: 0, stdout: vec![message], stderr: vec![] }
}

fn error_output(message: String) -> CliOutput {
    CliOutput { exit_code: 1, stdout: vec![], stderr: vec![message] }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{Event, Repo};
    use clap::Parser;
    use serde_json::json;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn test_store_path(dir: &TempDir) -> PathBuf {
        dir.path().join("tasks.json")
    }

    fn run_args(dir: &TempDir, args: &[&str]) -> CliOutput {
        let file = test_store_path(dir);
        let mut full = vec!["task-cli", "--file", file.to_str().unwrap()];
        full.extend_from_slice(args);
        run(Cli::parse_from(full))
    }

    /// Run with `--config` only, so store resolution goes through the config.
    fn run_with_config(config_path: &Path, args: &[&str]) -> CliOutput {
        let mut full = vec!["task-cli", "--config", config_path.to_str().unwrap()];
        full.extend_from_slice(args);
        run(Cli::parse_from(full))
    }

    #[test]
    fn test_add_prints_new_id() {
        let dir = TempDir::new().unwrap();

        let out = run_args(&dir, &["add", "buy", "milk"]);
        assert_eq!(out.exit_code, 0);
        assert_eq!(out.stdout, vec!["Task added successfully (ID: 1)"]);

        let out = run_args(&dir, &["add", "walk dog"]);
        assert_eq!(out.stdout, vec!["Task added successfully (ID: 2)"]);
    }

    #[test]
    fn test_add_joins_words_with_spaces() {
        let dir = TempDir::new().unwrap();
        run_args(&dir, &["add", "buy", "milk"]);

        let out = run_args(&dir, &["list"]);
        assert!(out.stdout[0].ends_with("buy milk"));
    }

    #[test]
    fn test_add_whitespace_description_fails() {
        let dir = TempDir::new().unwrap();

        let out = run_args(&dir, &["add", "   "]);
        assert_eq!(out.exit_code, 1);
        assert!(out.stdout.is_empty());
        assert_eq!(out.stderr, vec!["description must not be empty"]);
    }

    #[test]
    fn test_list_empty_store() {
        let dir = TempDir::new().unwrap();

        let out = run_args(&dir, &["list"]);
        assert_eq!(out.exit_code, 0);
        assert_eq!(out.stdout, vec!["No tasks found."]);
    }

    #[test]
    fn test_list_shows_id_status_description() {
        let dir = TempDir::new().unwrap();
        run_args(&dir, &["add", "buy milk"]);

        let out = run_args(&dir, &["list"]);
        assert_eq!(out.exit_code, 0);
        assert_eq!(out.stdout.len(), 1);
        assert!(out.stdout[0].contains('1'));
        assert!(out.stdout[0].contains("[todo]"));
        assert!(out.stdout[0].contains("buy milk"));
    }

    #[test]
    fn test_list_with_status_filter() {
        let dir = TempDir::new().unwrap();
        run_args(&dir, &["add", "buy milk"]);
        run_args(&dir, &["add", "walk dog"]);
        run_args(&dir, &["mark-done", "1"]);

        let out = run_args(&dir, &["list", "--status", "done"]);
        assert_eq!(out.stdout.len(), 1);
        assert!(out.stdout[0].contains("buy milk"));

        let out = run_args(&dir, &["list", "--status", "todo"]);
        assert_eq!(out.stdout.len(), 1);
        assert!(out.stdout[0].contains("walk dog"));
    }

    #[test]
    fn test_list_invalid_status_fails() {
        let dir = TempDir::new().unwrap();

        let out = run_args(&dir, &["list", "--status", "finished"]);
        assert_eq!(out.exit_code, 1);
        assert!(out.stderr[0].contains("invalid status"));
        assert!(out.stderr[0].contains("finished"));
    }

    #[test]
    fn test_update_replaces_description() {
        let dir = TempDir::new().unwrap();
        run_args(&dir, &["add", "by milk"]);

        let out = run_args(&dir, &["update", "1", "buy", "milk"]);
        assert_eq!(out.exit_code, 0);
        assert_eq!(out.stdout, vec!["Task 1 updated."]);

        let out = run_args(&dir, &["list"]);
        assert!(out.stdout[0].contains("buy milk"));
    }

    #[test]
    fn test_update_missing_task_fails() {
        let dir = TempDir::new().unwrap();

        let out = run_args(&dir, &["update", "7", "anything"]);
        assert_eq!(out.exit_code, 1);
        assert_eq!(out.stderr, vec!["task not found: 7"]);
    }

    #[test]
    fn test_mark_commands() {
        let dir = TempDir::new().unwrap();
        run_args(&dir, &["add", "buy milk"]);

        let out = run_args(&dir, &["mark-in-progress", "1"]);
        assert_eq!(out.exit_code, 0);
        assert_eq!(out.stdout, vec!["Task 1 marked in-progress."]);

        let out = run_args(&dir, &["mark-done", "1"]);
        assert_eq!(out.stdout, vec!["Task 1 marked done."]);

        let out = run_args(&dir, &["mark-done", "9"]);
        assert_eq!(out.exit_code, 1);
        assert_eq!(out.stderr, vec!["task not found: 9"]);
    }

    #[test]
    fn test_delete() {
        let dir = TempDir::new().unwrap();
        run_args(&dir, &["add", "buy milk"]);

        let out = run_args(&dir, &["delete", "1"]);
        assert_eq!(out.exit_code, 0);
        assert_eq!(out.stdout, vec!["Task 1 deleted."]);

        let out = run_args(&dir, &["delete", "1"]);
        assert_eq!(out.exit_code, 1);
        assert_eq!(out.stderr, vec!["task not found: 1"]);
    }

    #[test]
    fn test_corrupt_store_reported_on_stderr() {
        let dir = TempDir::new().unwrap();
        std::fs::write(test_store_path(&dir), "{broken").unwrap();

        let out = run_args(&dir, &["list"]);
        assert_eq!(out.exit_code, 1);
        assert!(out.stderr[0].contains("corrupt"));
    }

    #[test]
    fn test_config_set_store_then_add_uses_configured_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yaml");
        let store_path = dir.path().join("configured-tasks.json");

        let out = run_with_config(
            &config_path,
            &["config", "set-store", store_path.to_str().unwrap()],
        );
        assert_eq!(out.exit_code, 0);
        assert_eq!(
            out.stdout,
            vec![format!("Task file path set to {}", store_path.display())]
        );

        // Without --file, the add lands in the configured task file.
        let out = run_with_config(&config_path, &["add", "buy milk"]);
        assert_eq!(out.exit_code, 0);
        assert!(store_path.exists());
    }

    #[test]
    fn test_config_show_reports_effective_task_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yaml");
        let store_path = dir.path().join("configured-tasks.json");

        run_with_config(&config_path, &["config", "set-store", store_path.to_str().unwrap()]);

        let out = run_with_config(&config_path, &["config", "show"]);
        assert_eq!(out.exit_code, 0);
        assert_eq!(out.stdout[0], format!("config file: {}", config_path.display()));
        assert_eq!(out.stdout[1], format!("task file: {}", store_path.display()));
    }

    #[test]
    fn test_config_set_store_preserves_malformed_config_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yaml");
        std::fs::write(&config_path, "store_path: {broken").unwrap();

        let out = run_with_config(&config_path, &["config", "set-store", "/tmp/t.json"]);
        assert_eq!(out.exit_code, 1);
        assert!(out.stderr[0].contains("config error"));
    }

    #[test]
    fn test_malformed_config_fails_task_commands() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yaml");
        std::fs::write(&config_path, "store_path: {broken").unwrap();

        let out = run_with_config(&config_path, &["list"]);
        assert_eq!(out.exit_code, 1);
        assert!(out.stderr[0].contains("config error"));
    }

    #[test]
    fn test_activity_cached_empty() {
        let dir = TempDir::new().unwrap();
        let cache_path = dir.path().join("events.json");

        let out = run(Cli::parse_from([
            "task-cli",
            "activity",
            "cached",
            "--cache",
            cache_path.to_str().unwrap(),
        ]));
        assert_eq!(out.exit_code, 0);
        assert_eq!(out.stdout, vec!["No events found."]);
    }

    #[test]
    fn test_activity_cached_shows_saved_events() {
        let dir = TempDir::new().unwrap();
        let cache_path = dir.path().join("events.json");

        let events = vec![Event {
            kind: "WatchEvent".to_string(),
            repo: Repo { name: "octocat/hello".to_string() },
            payload: json!({"action": "started"}),
            created_at: Some("2024-03-01T12:30:00Z".to_string()),
        }];
        EventCache::new(&cache_path).save(&events).unwrap();

        let out = run(Cli::parse_from([
            "task-cli",
            "activity",
            "cached",
            "--cache",
            cache_path.to_str().unwrap(),
        ]));
        assert_eq!(out.exit_code, 0);
        assert_eq!(out.stdout, vec!["- Started watching octocat/hello (2024-03-01 12:30)"]);
    }

    #[test]
    fn test_activity_cached_respects_limit() {
        let dir = TempDir::new().unwrap();
        let cache_path = dir.path().join("events.json");

        let events: Vec<Event> = (0..5)
            .map(|i| Event {
                kind: "WatchEvent".to_string(),
                repo: Repo { name: format!("octocat/repo-{i}") },
                payload: json!({}),
                created_at: None,
            })
            .collect();
        EventCache::new(&cache_path).save(&events).unwrap();

        let out = run(Cli::parse_from([
            "task-cli",
            "activity",
            "cached",
            "--limit",
            "2",
            "--cache",
            cache_path.to_str().unwrap(),
        ]));
        assert_eq!(out.stdout.len(), 2);
        assert!(out.stdout[0].contains("repo-0"));
        assert!(out.stdout[1].contains("repo-1"));
    }

    #[test]
    fn test_version_output() {
        let dir = TempDir::new().unwrap();

        let out = run_args(&dir, &["version"]);
        assert_eq!(out.exit_code, 0);
        assert!(out.stdout[0].starts_with("task-cli v"));
    }
}
