//! GitHub event model and human-readable formatting.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Longest title fragment shown before truncation.
const MAX_TITLE_LEN: usize = 80;

fn default_kind() -> String {
    "UnknownEvent".to_string()
}

fn default_repo_name() -> String {
    "UnknownRepo".to_string()
}

/// The repository an event happened in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    /// Full repository name, e.g. `owner/name`.
    #[serde(default = "default_repo_name")]
    pub name: String,
}

impl Default for Repo {
    fn default() -> Self {
        Self { name: default_repo_name() }
    }
}

/// One event from the GitHub events API.
///
/// Only the fields the tracker displays are kept; the per-type details stay
/// in `payload` as raw JSON because their shape varies by event type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event type, e.g. `PushEvent`.
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    /// Repository the event happened in.
    #[serde(default)]
    pub repo: Repo,
    /// Type-specific event details.
    #[serde(default)]
    pub payload: Value,
    /// When the event happened (RFC 3339), if the API supplied it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Produce a one-line description of an event.
#[must_use]
pub fn format_event(event: &Event) -> String {
    let repo = &event.repo.name;
    let payload = &event.payload;

    match event.kind.as_str() {
        "PushEvent" => {
            let count = payload.get("commits").and_then(Value::as_array).map_or(0, Vec::len);
            let plural = if count == 1 { "" } else { "s" };
            format!("Pushed {count} commit{plural} to {repo}")
        }
        "IssuesEvent" => {
            let action = capitalize(str_at(payload, &["action"]).unwrap_or("performed"));
            let title = truncate(str_at(payload, &["issue", "title"]).unwrap_or(""));
            format!("{action} issue '{title}' in {repo}")
        }
        "WatchEvent" => {
            let action = capitalize(str_at(payload, &["action"]).unwrap_or("started"));
            format!("{action} watching {repo}")
        }
        "IssueCommentEvent" => {
            let action = capitalize(str_at(payload, &["action"]).unwrap_or("commented"));
            let title = truncate(str_at(payload, &["issue", "title"]).unwrap_or(""));
            format!("{action} comment on issue '{title}' in {repo}")
        }
        "PullRequestEvent" => {
            let action = capitalize(str_at(payload, &["action"]).unwrap_or("performed"));
            let title = truncate(str_at(payload, &["pull_request", "title"]).unwrap_or(""));
            format!("{action} pull request '{title}' in {repo}")
        }
        "PullRequestReviewCommentEvent" => {
            format!("Commented on a pull request in {repo}")
        }
        kind @ ("CreateEvent" | "DeleteEvent") => {
            let verb = if kind == "CreateEvent" { "Created" } else { "Deleted" };
            let ref_type = str_at(payload, &["ref_type"]).unwrap_or("ref");
            let name = str_at(payload, &["ref"]).unwrap_or("");
            format!("{verb} {ref_type} '{name}' in {repo}")
        }
        "ForkEvent" => {
            let forkee = str_at(payload, &["forkee", "full_name"]).unwrap_or("<fork>");
            format!("Forked {repo} to {forkee}")
        }
        "ReleaseEvent" => {
            let action = capitalize(str_at(payload, &["action"]).unwrap_or("released"));
            let tag = str_at(payload, &["release", "tag_name"]).unwrap_or("");
            format!("{action} release '{tag}' in {repo}")
        }
        kind => format!("{kind} on {repo}"),
    }
}

/// Render events as listing lines: `- <description> (<timestamp>)`.
#[must_use]
pub fn render_events(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .map(|event| {
            let desc = format_event(event);
            event.created_at.as_deref().map_or_else(
                || format!("- {desc}"),
                |created| format!("- {desc} ({})", format_timestamp(created)),
            )
        })
        .collect()
}

/// Format an RFC 3339 timestamp as `YYYY-MM-DD HH:MM`, falling back to the
/// raw string when it does not parse.
fn format_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map_or_else(|_| raw.to_string(), |dt| dt.format("%Y-%m-%d %H:%M").to_string())
}

/// Look up a nested string in a JSON value.
fn str_at<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    let mut current = value;
    for key in keys {
        current = current.get(key)?;
    }
    current.as_str()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_TITLE_LEN {
        let mut truncated: String = text.chars().take(MAX_TITLE_LEN - 3).collect();
        truncated.push_str("...");
        truncated
    } else {
        text.to_string()
    }
}
