//! Task and work-unit domain model.
//!
//! # Responsibility
//! - Define the task record and its wire-compatible serde shape.
//! - Validate backend records before they reach accounting.
//!
//! # Invariants
//! - `id` is opaque, non-empty, and stable across fetches.
//! - Finished units never end before they start.
//! - At most one unit is open, and an open unit is always the last one.
//! - `is_current` mirrors "exactly one open unit exists".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a task, supplied by the Right Port adapter.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = String;

/// One contiguous interval of work on a task.
///
/// A missing `finished_at` marks the open interval `[started_at, now)` of
/// work still in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkUnit {
    pub started_at: DateTime<Utc>,
    /// `None` while the unit is in progress; serialized as `null`.
    pub finished_at: Option<DateTime<Utc>>,
}

impl WorkUnit {
    /// Creates a finished unit covering `[started_at, finished_at]`.
    pub fn finished(started_at: DateTime<Utc>, finished_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            finished_at: Some(finished_at),
        }
    }

    /// Creates an open unit started at `started_at` and still running.
    pub fn open(started_at: DateTime<Utc>) -> Self {
        Self {
            started_at,
            finished_at: None,
        }
    }

    /// Returns whether this unit is still in progress.
    pub fn is_open(&self) -> bool {
        self.finished_at.is_none()
    }
}

/// Canonical task record as fetched from the Right Port.
///
/// Field names follow the wire contract of the backend JSON shape, so serde
/// derives double as the transport codec for any conforming adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque stable ID used for list keying and cross-fetch identity.
    pub id: TaskId,
    /// Display title; must be non-empty.
    pub title: String,
    /// Creation instant, immutable.
    pub created_at: DateTime<Utc>,
    /// Redundant flag; must equal "exactly one open work unit exists".
    pub is_current: bool,
    /// Budgeted duration in whole seconds, never negative.
    pub time_allowance_in_seconds: i64,
    /// Chronologically ordered work intervals; an open unit is last.
    pub work_units: Vec<WorkUnit>,
}

/// Violations of the task structural invariants.
///
/// Variants carry the offending values so callers can log actionable
/// diagnostics without re-deriving them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// `id` is empty after trim.
    EmptyId,
    /// `title` is empty after trim.
    EmptyTitle,
    /// `time_allowance_in_seconds` is negative.
    NegativeAllowance { allowance: i64 },
    /// A finished unit ends before it starts.
    ReversedWorkUnit {
        index: usize,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    },
    /// More than one unit has no finish timestamp.
    MultipleOpenWorkUnits { open_count: usize },
    /// An open unit is followed by further units.
    OpenWorkUnitNotLast { index: usize },
    /// A unit starts before its predecessor finished.
    OverlappingWorkUnits {
        index: usize,
        previous_finished_at: DateTime<Utc>,
        started_at: DateTime<Utc>,
    },
    /// `is_current` disagrees with the presence of an open unit.
    CurrentFlagMismatch { is_current: bool, open_count: usize },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "task id must not be empty"),
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::NegativeAllowance { allowance } => {
                write!(f, "time allowance must be >= 0, got {allowance}")
            }
            Self::ReversedWorkUnit {
                index,
                started_at,
                finished_at,
            } => write!(
                f,
                "work unit {index} finishes ({finished_at}) before it starts ({started_at})"
            ),
            Self::MultipleOpenWorkUnits { open_count } => {
                write!(f, "at most one open work unit is allowed, got {open_count}")
            }
            Self::OpenWorkUnitNotLast { index } => {
                write!(f, "open work unit at index {index} must be the last unit")
            }
            Self::OverlappingWorkUnits {
                index,
                previous_finished_at,
                started_at,
            } => write!(
                f,
                "work unit {index} starts ({started_at}) before the previous unit finished ({previous_finished_at})"
            ),
            Self::CurrentFlagMismatch {
                is_current,
                open_count,
            } => write!(
                f,
                "isCurrent={is_current} but task has {open_count} open work unit(s)"
            ),
        }
    }
}

impl Error for TaskValidationError {}

impl Task {
    /// Checks the structural invariants required before accounting.
    ///
    /// # Contract
    /// - Returns the first violation found, in field order.
    /// - A task that passes needs no rechecks downstream.
    ///
    /// # Errors
    /// - Empty `id` or `title`.
    /// - Negative allowance.
    /// - Reversed, overlapping, or multiply-open work units.
    /// - `is_current` disagreeing with the open-unit count.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.trim().is_empty() {
            return Err(TaskValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if self.time_allowance_in_seconds < 0 {
            return Err(TaskValidationError::NegativeAllowance {
                allowance: self.time_allowance_in_seconds,
            });
        }

        let open_count = self.work_units.iter().filter(|unit| unit.is_open()).count();
        if open_count > 1 {
            return Err(TaskValidationError::MultipleOpenWorkUnits { open_count });
        }

        for (index, unit) in self.work_units.iter().enumerate() {
            match unit.finished_at {
                Some(finished_at) => {
                    if finished_at < unit.started_at {
                        return Err(TaskValidationError::ReversedWorkUnit {
                            index,
                            started_at: unit.started_at,
                            finished_at,
                        });
                    }
                }
                None => {
                    if index + 1 != self.work_units.len() {
                        return Err(TaskValidationError::OpenWorkUnitNotLast { index });
                    }
                }
            }

            if index > 0 {
                // Insertion order is chronological, so overlap reduces to a
                // pairwise check against the predecessor's finish time.
                let previous = &self.work_units[index - 1];
                if let Some(previous_finished_at) = previous.finished_at {
                    if unit.started_at < previous_finished_at {
                        return Err(TaskValidationError::OverlappingWorkUnits {
                            index,
                            previous_finished_at,
                            started_at: unit.started_at,
                        });
                    }
                }
            }
        }

        if self.is_current != (open_count == 1) {
            return Err(TaskValidationError::CurrentFlagMismatch {
                is_current: self.is_current,
                open_count,
            });
        }

        Ok(())
    }

    /// Returns the open work unit, if the task has one.
    pub fn open_work_unit(&self) -> Option<&WorkUnit> {
        self.work_units.iter().find(|unit| unit.is_open())
    }
}
