//! HTTP server exposing the simulated person count.
//!
//! Serves `GET /count` from any [`CountSource`], with structured logging
//! (tracing), Prometheus metrics and permissive CORS so a browser dashboard
//! on another origin can poll it.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use counter::{CountSource, SimulatedCounter};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::count::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: CountSource + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/count", get(routes::count::get::<S>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state backed by the wall-clock simulator.
pub fn create_default_state() -> Arc<AppState<SimulatedCounter>> {
    Arc::new(AppState::new(SimulatedCounter::new()))
}
