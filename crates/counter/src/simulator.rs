//! Time-driven placeholder for a real person detector.

use std::sync::atomic::{AtomicU8, Ordering};

use async_trait::async_trait;

use crate::clock::{Clock, SystemClock};
use crate::source::CountSource;
use crate::{Count, Phase, Result};

/// Simulates people entering and leaving on a 10-second cycle.
///
/// During phases 0..=4 each reading adds one person (up to [`Count::MAX`]),
/// during phases 5..=9 each reading removes one (down to zero). The count
/// lives in this struct, not in a global, and starts at zero.
#[derive(Debug, Default)]
pub struct SimulatedCounter<C = SystemClock> {
    clock: C,
    count: AtomicU8,
}

impl SimulatedCounter<SystemClock> {
    /// Creates a simulator driven by the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> SimulatedCounter<C> {
    pub fn with_clock(clock: C) -> Self {
        Self::starting_at(clock, Count::ZERO)
    }

    /// Creates a simulator whose first reading steps from `start`.
    pub fn starting_at(clock: C, start: Count) -> Self {
        Self {
            clock,
            count: AtomicU8::new(start.get()),
        }
    }

    /// Returns the stored count without advancing it.
    pub fn current(&self) -> Count {
        stored(self.count.load(Ordering::Acquire))
    }

    /// Applies one step for the clock's current phase and returns the new count.
    pub fn advance(&self) -> Count {
        let phase = Phase::from_unix_secs(self.clock.unix_seconds());
        let step = |raw: u8| Some(stored(raw).step(phase).get());

        // The closure never returns None, so both arms carry the previous value.
        let previous = match self.count.fetch_update(Ordering::AcqRel, Ordering::Acquire, step) {
            Ok(prev) | Err(prev) => prev,
        };
        let next = stored(previous).step(phase);

        tracing::debug!(%phase, count = %next, "simulated count updated");
        metrics::gauge!("person_count").set(f64::from(next.get()));
        next
    }
}

#[async_trait]
impl<C: Clock> CountSource for SimulatedCounter<C> {
    async fn initialize(&self) -> Result<()> {
        tracing::info!("simulated count source ready, no detection model loaded");
        Ok(())
    }

    async fn next_count(&self) -> Result<Count> {
        Ok(self.advance())
    }
}

// Only values produced by `Count` are ever stored.
fn stored(raw: u8) -> Count {
    Count::new(raw).unwrap_or(Count::MAX)
}
