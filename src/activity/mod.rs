//! GitHub activity tracking.
//!
//! Fetches a user's recent public events from the GitHub events API, formats
//! each event type as a one-line description, and caches the results in a
//! local JSON file (`~/.task-cli/events.json` by default) so they can be
//! re-read without hitting the API.

mod cache;
mod client;
mod models;

pub use cache::EventCache;
pub use client::GithubClient;
pub use models::{format_event, render_events, Event, Repo};
