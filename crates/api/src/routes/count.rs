//! Person count endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use common::Count;
use counter::CountSource;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: CountSource> {
    pub source: S,
}

impl<S: CountSource> AppState<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: Count,
}

/// GET /count: advances the count source once and returns the new count.
#[tracing::instrument(skip(state))]
pub async fn get<S: CountSource + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<CountResponse>, ApiError> {
    let count = state.source.next_count().await?;
    metrics::counter!("count_requests_total").increment(1);
    tracing::info!(%count, "served person count");

    Ok(Json(CountResponse { count }))
}
