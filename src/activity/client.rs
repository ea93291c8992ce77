//! HTTP client for the GitHub events API.

use crate::activity::models::Event;
use crate::error::{Error, Result};
use std::time::Duration;

/// Base URL of the GitHub REST API.
const GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub rejects requests without a User-Agent header.
const USER_AGENT: &str = concat!("task-cli/", env!("CARGO_PKG_VERSION"));

/// Client for fetching a user's public activity.
pub struct GithubClient {
    agent: ureq::Agent,
    token: Option<String>,
}

impl GithubClient {
    /// Create a client, optionally authenticating with a personal access
    /// token (raises the API rate limit).
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(10))
            .timeout_read(Duration::from_secs(20))
            .build();
        Self { agent, token }
    }

    /// Fetch up to `limit` recent public events for a user, newest first.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` for an unknown username, `RateLimited` when
    /// the API responds 403, and `Http` for any other request or response
    /// failure.
    pub fn fetch_events(&self, username: &str, limit: usize) -> Result<Vec<Event>> {
        let url = format!("{GITHUB_API_URL}/users/{username}/events");
        let mut request = self
            .agent
            .get(&url)
            .set("User-Agent", USER_AGENT)
            .set("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("token {token}"));
        }

        match request.call() {
            Ok(response) => {
                let body = response.into_string().map_err(|e| Error::Http(e.to_string()))?;
                let mut events: Vec<Event> = serde_json::from_str(&body)
                    .map_err(|e| Error::Http(format!("failed to parse response: {e}")))?;
                events.truncate(limit);
                Ok(events)
            }
            Err(ureq::Error::Status(404, _)) => Err(Error::UserNotFound(username.to_string())),
            Err(ureq::Error::Status(403, _)) => Err(Error::RateLimited),
            Err(e) => Err(Error::Http(e.to_string())),
        }
    }
}
