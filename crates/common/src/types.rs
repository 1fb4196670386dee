use serde::{Deserialize, Serialize};

/// A person count, always within `0..=Count::MAX`.
///
/// Wraps a `u8` so an out-of-range tally cannot be constructed; the
/// simulator and any future detection source share this bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Count(u8);

impl Count {
    /// Upper bound of the tally.
    pub const MAX: Count = Count(10);

    /// The empty tally.
    pub const ZERO: Count = Count(0);

    /// Creates a count, returning `None` if `value` exceeds [`Count::MAX`].
    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX.0).then_some(Self(value))
    }

    /// Returns the raw value.
    pub fn get(self) -> u8 {
        self.0
    }

    /// One more, saturating at [`Count::MAX`].
    pub fn increment(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::MAX.0))
    }

    /// One fewer, saturating at zero.
    pub fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// Applies one simulation step in the given phase.
    pub fn step(self, phase: Phase) -> Self {
        match phase.direction() {
            Direction::Rising => self.increment(),
            Direction::Falling => self.decrement(),
        }
    }
}

impl std::fmt::Display for Count {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Count> for u8 {
    fn from(count: Count) -> Self {
        count.0
    }
}

impl<'de> Deserialize<'de> for Count {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Count::new(value).ok_or_else(|| {
            serde::de::Error::custom(format!("count {value} exceeds maximum {}", Count::MAX))
        })
    }
}

/// Which way the simulated tally moves during a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rising,
    Falling,
}

/// Position within the 10-second simulation cycle, `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Phase(u8);

impl Phase {
    /// Length of one full cycle in seconds.
    pub const PERIOD_SECS: i64 = 10;

    /// Phases below this value are rising.
    const RISING_UNTIL: u8 = 5;

    /// Derives the phase from a Unix timestamp in whole seconds.
    ///
    /// Uses the Euclidean remainder so pre-epoch timestamps still land in
    /// `0..=9`.
    pub fn from_unix_secs(secs: i64) -> Self {
        // rem_euclid with a positive divisor is always in 0..PERIOD_SECS
        Self(secs.rem_euclid(Self::PERIOD_SECS) as u8)
    }

    /// Returns the raw phase value.
    pub fn get(self) -> u8 {
        self.0
    }

    pub fn direction(self) -> Direction {
        if self.0 < Self::RISING_UNTIL {
            Direction::Rising
        } else {
            Direction::Falling
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
