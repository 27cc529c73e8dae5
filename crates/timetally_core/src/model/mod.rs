//! Domain model for time-tracked tasks.
//!
//! # Responsibility
//! - Define the canonical `Task`/`WorkUnit` records used by core logic.
//! - Enforce structural invariants at the trust boundary via `Task::validate()`.
//!
//! # Invariants
//! - A task accepted by `validate()` is safe for accounting without rechecks.
//! - Work units are ordered chronologically; an open unit is always last.

pub mod task;
