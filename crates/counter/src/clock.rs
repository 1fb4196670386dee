//! Wall-clock abstraction for the simulator.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of the current Unix time in whole seconds.
pub trait Clock: Send + Sync {
    fn unix_seconds(&self) -> i64;
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can hold one handle while the
/// simulator owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    secs: Arc<AtomicI64>,
}

impl ManualClock {
    /// Creates a clock fixed at `secs`.
    pub fn at(secs: i64) -> Self {
        Self {
            secs: Arc::new(AtomicI64::new(secs)),
        }
    }

    pub fn set(&self, secs: i64) {
        self.secs.store(secs, Ordering::SeqCst);
    }

    /// Moves the clock forward by `secs`.
    pub fn advance(&self, secs: i64) {
        self.secs.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn unix_seconds(&self) -> i64 {
        self.secs.load(Ordering::SeqCst)
    }
}
