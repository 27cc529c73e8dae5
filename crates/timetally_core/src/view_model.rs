//! Display-ready task list view model.
//!
//! # Responsibility
//! - Map a task plus its accounting result into a UI-agnostic row.
//! - Format durations; never perform duration arithmetic of its own.
//!
//! # Invariants
//! - `is_overtime` passes through from the accounting result unchanged.
//! - Display strings are `HH:MM:SS` of the absolute value, with a leading
//!   `-` on `remaining_display` when the budget is exhausted.

use crate::accounting::AccountingResult;
use crate::model::task::{Task, TaskId};
use serde::Serialize;

/// One rendered row of the task list.
///
/// UI layers read these fields verbatim; raw `Task` data stays behind the
/// service boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListItemViewModel {
    pub id: TaskId,
    pub title: String,
    /// Elapsed time as `HH:MM:SS`.
    pub elapsed_display: String,
    /// Remaining time as `HH:MM:SS`, prefixed with `-` once negative.
    pub remaining_display: String,
    pub is_overtime: bool,
}

/// Maps an already-computed accounting result onto a display row.
///
/// # Contract
/// - Formats only; the numeric result is taken as-is.
pub fn to_view_model(task: &Task, result: &AccountingResult) -> TaskListItemViewModel {
    TaskListItemViewModel {
        id: task.id.clone(),
        title: task.title.clone(),
        elapsed_display: format_duration(result.elapsed_seconds),
        remaining_display: format_duration(result.remaining_seconds),
        is_overtime: result.is_overtime,
    }
}

/// Formats whole seconds as `HH:MM:SS`, sign-prefixed when negative.
///
/// Hours widen past two digits instead of wrapping, so multi-day totals
/// stay unambiguous.
fn format_duration(total_seconds: i64) -> String {
    let magnitude = total_seconds.unsigned_abs();
    let hours = magnitude / 3600;
    let minutes = (magnitude % 3600) / 60;
    let seconds = magnitude % 60;
    let sign = if total_seconds < 0 { "-" } else { "" };
    format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
}
