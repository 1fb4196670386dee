//! Sources of the person count served over HTTP.
//!
//! - [`CountSource`] is the seam a real detection pipeline plugs into
//! - [`SimulatedCounter`] is the time-driven placeholder source
//! - [`Clock`] abstracts wall-clock reads so the simulator can be driven
//!   deterministically with [`ManualClock`]

pub mod clock;
pub mod error;
pub mod simulator;
pub mod source;

pub use clock::{Clock, ManualClock, SystemClock};
pub use common::{Count, Direction, Phase};
pub use error::{CounterError, Result};
pub use simulator::SimulatedCounter;
pub use source::CountSource;
