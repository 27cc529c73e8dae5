//! Elapsed/remaining time accounting.
//!
//! # Responsibility
//! - Turn a task's work intervals into elapsed and remaining seconds at one
//!   explicit instant.
//!
//! # Invariants
//! - Pure: same `(task, now)` input always yields the same result.
//! - `elapsed_seconds` is never negative, even under clock skew.
//! - Inputs must already satisfy `Task::validate()`; no rechecks here.

use crate::model::task::Task;
use chrono::{DateTime, Utc};

/// Accounting outcome for one task at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountingResult {
    /// Total worked time in whole seconds, truncated, `>= 0`.
    pub elapsed_seconds: i64,
    /// Allowance minus elapsed; negative once the budget is exhausted.
    pub remaining_seconds: i64,
    /// True exactly when `remaining_seconds < 0`.
    pub is_overtime: bool,
}

/// Computes elapsed, remaining and overtime state for `task` at `now`.
///
/// # Contract
/// - Finished units contribute `finished_at - started_at`.
/// - The open unit, if any, contributes `now - started_at`, clamped to zero
///   when `now` precedes its start (stale snapshot or clock skew).
/// - `remaining_seconds = time_allowance_in_seconds - elapsed_seconds`.
pub fn compute(task: &Task, now: DateTime<Utc>) -> AccountingResult {
    let mut elapsed_seconds = 0;

    for unit in &task.work_units {
        elapsed_seconds += match unit.finished_at {
            Some(finished_at) => (finished_at - unit.started_at).num_seconds(),
            None => (now - unit.started_at).num_seconds().max(0),
        };
    }

    let remaining_seconds = task.time_allowance_in_seconds - elapsed_seconds;

    AccountingResult {
        elapsed_seconds,
        remaining_seconds,
        is_overtime: remaining_seconds < 0,
    }
}
