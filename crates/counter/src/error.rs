//! Count source error types.

use thiserror::Error;

/// Errors a count source can report.
///
/// The simulator never fails; these exist for sources backed by real
/// detection hardware or models.
#[derive(Debug, Error)]
pub enum CounterError {
    /// One-time setup of the source failed.
    #[error("Initialization failed: {0}")]
    Initialization(String),

    /// The source could not produce a reading right now.
    #[error("Count source unavailable: {0}")]
    Unavailable(String),
}

/// Result type for count source operations.
pub type Result<T> = std::result::Result<T, CounterError>;
