//! Task tracking: the data model and the JSON file store.
//!
//! Tasks have an integer id, a description, a three-valued status, and
//! creation/modification timestamps. The store keeps the full task list in a
//! single JSON file; every mutating operation is one load → mutate → save
//! cycle against that file.
//!
//! # Example
//!
//! ```no_run
//! use task_cli::tasks::{JsonTaskStore, Status, TaskStore};
//!
//! let store = JsonTaskStore::new("/tmp/tasks.json");
//!
//! let task = store.add("buy milk").unwrap();
//! store.set_status(task.id, Status::Done).unwrap();
//!
//! let done = store.list(Some(Status::Done)).unwrap();
//! assert_eq!(done[0].id, task.id);
//! ```

pub mod models;
pub mod store;

pub use models::{InvalidStatus, Status, Task};
pub use store::{JsonTaskStore, TaskStore};
