//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use counter::CounterError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The count source failed.
    Counter(CounterError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Counter(err) => counter_error_to_response(err),
        };

        if status.is_server_error() {
            tracing::error!(error = %message, %status, "request failed");
        }

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn counter_error_to_response(err: CounterError) -> (StatusCode, String) {
    match &err {
        CounterError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, err.to_string()),
        CounterError::Initialization(_) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

impl From<CounterError> for ApiError {
    fn from(err: CounterError) -> Self {
        ApiError::Counter(err)
    }
}
