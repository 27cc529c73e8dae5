//! Clock capability for explicit time injection.
//!
//! # Responsibility
//! - Supply "now" to the service layer without hidden wall-clock reads.
//! - Keep every accounting computation reproducible under test.
//!
//! # Invariants
//! - Domain code never calls `Utc::now()` directly; it asks a `Clock`.

use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex};

/// Capability trait for reading the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant according to this clock.
    fn now(&self) -> DateTime<Utc>;
}

/// Live clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hand-driven clock for deterministic tests and demos.
///
/// `now()` returns a fixed instant that moves only through `advance()` or
/// `set()`.
#[derive(Clone)]
pub struct ManualClock {
    current: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    /// Creates a manual clock pinned at `start`.
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    /// Moves the clock forward by `duration`.
    pub fn advance(&self, duration: Duration) {
        *self.current.lock().unwrap() += duration;
    }

    /// Pins the clock to `instant`.
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.current.lock().unwrap() = instant;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap()
    }
}
