//! Core domain logic for timetally, a time-tracking task list.
//! This crate is the single source of truth for duration accounting.
//!
//! UI layers call through [`TimeTrackingService`] (the Left Port) and render
//! [`TaskListItemViewModel`] rows; data comes in through [`TaskRepository`]
//! (the Right Port). Nothing else crosses either boundary.

pub mod accounting;
pub mod clock;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view_model;

pub use accounting::{compute, AccountingResult};
pub use clock::{Clock, ManualClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, TaskValidationError, WorkUnit};
pub use repo::task_repo::{FetchError, FetchResult, StaticTaskRepository, TaskRepository};
pub use service::time_tracking::{
    InvalidTaskPolicy, RejectedTask, TaskListError, TaskListReport, TimeTrackingService,
};
pub use view_model::{to_view_model, TaskListItemViewModel};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
