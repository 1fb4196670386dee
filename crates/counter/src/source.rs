use async_trait::async_trait;

use crate::{Count, Result};

/// Anything that can produce the next person count.
///
/// Handlers depend only on this trait, so a real detector can replace the
/// simulator without touching the HTTP contract.
#[async_trait]
pub trait CountSource: Send + Sync {
    /// One-time setup, run before the server starts accepting requests.
    async fn initialize(&self) -> Result<()> {
        Ok(())
    }

    /// Advances the source by one reading and returns the resulting count.
    ///
    /// Called exactly once per `GET /count`.
    async fn next_count(&self) -> Result<Count>;
}
