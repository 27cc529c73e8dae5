//! Left Port services exposed to UI layers.
//!
//! # Responsibility
//! - Orchestrate repository, clock, accounting and mapping into one facade.
//! - Keep UI code decoupled from raw task data and duration arithmetic.

pub mod time_tracking;
