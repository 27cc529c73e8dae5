//! Task repository contract and in-memory fake adapter.
//!
//! # Responsibility
//! - Define the async Right Port the core fetches task lists through.
//! - Provide a deterministic fake adapter for tests and demos.
//!
//! # Invariants
//! - `fetch_tasks` is all-or-nothing: a list or a `FetchError`, no partials.
//! - Adapters deliver tasks in stable backend order; the core preserves it.

use crate::model::task::Task;
use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex};

pub type FetchResult<T> = Result<T, FetchError>;

/// Failure of a task fetch, attributed to the adapter's transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network or backend failure while fetching.
    Transport(String),
    /// The adapter received a response it could not decode into tasks.
    Decode(String),
    /// The in-flight fetch was cancelled by the adapter or its caller.
    Cancelled,
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "task fetch failed: {message}"),
            Self::Decode(message) => write!(f, "task payload could not be decoded: {message}"),
            Self::Cancelled => write!(f, "task fetch was cancelled"),
        }
    }
}

impl Error for FetchError {}

/// Async Right Port for obtaining the raw task list.
///
/// Implementations own all transport concerns (HTTP, local storage, canned
/// data) and the retry policy, if any; the core retries nothing.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetches every task the backend knows about, in backend order.
    async fn fetch_tasks(&self) -> FetchResult<Vec<Task>>;
}

/// In-memory fake adapter serving a fixed task list or a canned failure.
///
/// Swappable with any real adapter behind `TaskRepository`; used by core
/// tests and the demo CLI.
#[derive(Clone)]
pub struct StaticTaskRepository {
    outcome: Arc<Mutex<FetchResult<Vec<Task>>>>,
}

impl StaticTaskRepository {
    /// Creates a fake that returns a clone of `tasks` on every fetch.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(Ok(tasks))),
        }
    }

    /// Creates a fake whose every fetch fails with `error`.
    pub fn failing(error: FetchError) -> Self {
        Self {
            outcome: Arc::new(Mutex::new(Err(error))),
        }
    }

    /// Replaces the canned outcome for subsequent fetches.
    pub fn set_outcome(&self, outcome: FetchResult<Vec<Task>>) {
        *self.outcome.lock().unwrap() = outcome;
    }
}

#[async_trait]
impl TaskRepository for StaticTaskRepository {
    async fn fetch_tasks(&self) -> FetchResult<Vec<Task>> {
        self.outcome.lock().unwrap().clone()
    }
}
