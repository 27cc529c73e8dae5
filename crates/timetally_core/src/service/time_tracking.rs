//! Time-tracking facade service (Left Port).
//!
//! # Responsibility
//! - Sole entry point UI layers call for the rendered task list.
//! - Orchestrate fetch → validate → account → map behind one contract.
//!
//! # Invariants
//! - "Now" is sampled once per call, so all rows share a consistent instant.
//! - A fetch failure yields no partial list.
//! - Repository ordering is preserved in the returned rows.
//! - Invalid tasks never reach the accounting computation.

use crate::accounting;
use crate::clock::Clock;
use crate::model::task::{TaskId, TaskValidationError};
use crate::repo::task_repo::{FetchError, TaskRepository};
use crate::view_model::{to_view_model, TaskListItemViewModel};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Policy for tasks that fail structural validation after a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidTaskPolicy {
    /// Drop the offending task, keep rendering the valid ones (lenient).
    #[default]
    Skip,
    /// Fail the whole call on the first invalid task (strict).
    Fail,
}

/// Errors surfaced to callers of the task list operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListError {
    /// The repository fetch failed; no rows are available.
    Fetch(FetchError),
    /// Strict policy: a fetched task violated a structural invariant.
    InvalidTask {
        id: TaskId,
        error: TaskValidationError,
    },
}

impl Display for TaskListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch(err) => write!(f, "{err}"),
            Self::InvalidTask { id, error } => {
                write!(f, "task `{id}` failed validation: {error}")
            }
        }
    }
}

impl Error for TaskListError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fetch(err) => Some(err),
            Self::InvalidTask { error, .. } => Some(error),
        }
    }
}

impl From<FetchError> for TaskListError {
    fn from(value: FetchError) -> Self {
        Self::Fetch(value)
    }
}

/// A task dropped under `InvalidTaskPolicy::Skip`, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedTask {
    pub id: TaskId,
    pub error: TaskValidationError,
}

/// Task list rows plus the side-channel of rejected tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListReport {
    /// Display rows in repository order.
    pub items: Vec<TaskListItemViewModel>,
    /// Tasks dropped by the skip policy; empty under strict policy.
    pub rejected: Vec<RejectedTask>,
}

/// Left Port facade over repository, clock, accounting and mapping.
///
/// UI layers hold this service and nothing else from the core; raw task
/// records and duration arithmetic stay behind it.
pub struct TimeTrackingService<R: TaskRepository, C: Clock> {
    repo: R,
    clock: C,
    invalid_task_policy: InvalidTaskPolicy,
}

impl<R: TaskRepository, C: Clock> TimeTrackingService<R, C> {
    /// Creates a service with the lenient skip policy for invalid tasks.
    pub fn new(repo: R, clock: C) -> Self {
        Self::with_policy(repo, clock, InvalidTaskPolicy::default())
    }

    /// Creates a service with an explicit invalid-task policy.
    pub fn with_policy(repo: R, clock: C, invalid_task_policy: InvalidTaskPolicy) -> Self {
        Self {
            repo,
            clock,
            invalid_task_policy,
        }
    }

    /// Returns the rendered task list in repository order.
    ///
    /// # Contract
    /// - Samples the clock once; every row reflects the same instant.
    /// - Fetch failure returns `TaskListError::Fetch` and no rows.
    /// - Under `Skip`, invalid tasks are dropped and logged; under `Fail`,
    ///   the first invalid task fails the call.
    pub async fn task_list(&self) -> Result<Vec<TaskListItemViewModel>, TaskListError> {
        self.task_list_with_report().await.map(|report| report.items)
    }

    /// Same as [`task_list`](Self::task_list), but also returns the
    /// rejected-task side-channel for callers that observe skips
    /// programmatically instead of through logs.
    pub async fn task_list_with_report(&self) -> Result<TaskListReport, TaskListError> {
        let tasks = self.repo.fetch_tasks().await?;
        let now = self.clock.now();

        let mut items = Vec::with_capacity(tasks.len());
        let mut rejected = Vec::new();

        for task in &tasks {
            if let Err(error) = task.validate() {
                match self.invalid_task_policy {
                    InvalidTaskPolicy::Skip => {
                        warn!(
                            "event=task_rejected module=core status=skipped task_id={} reason={}",
                            task.id, error
                        );
                        rejected.push(RejectedTask {
                            id: task.id.clone(),
                            error,
                        });
                        continue;
                    }
                    InvalidTaskPolicy::Fail => {
                        return Err(TaskListError::InvalidTask {
                            id: task.id.clone(),
                            error,
                        });
                    }
                }
            }

            let result = accounting::compute(task, now);
            items.push(to_view_model(task, &result));
        }

        Ok(TaskListReport { items, rejected })
    }
}
