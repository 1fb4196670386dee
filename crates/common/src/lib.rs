//! Shared value types for the person count server.

pub mod types;

pub use types::{Count, Direction, Phase};
