//! Handler-level error mapping for the demo server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use gate_client::ClientError;

#[derive(Debug, Error)]
pub enum AppError {
    /// An upstream data-fetch call failed.
    #[error("upstream call failed: {0}")]
    Upstream(#[from] ClientError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        tracing::warn!(error = %self, "request failed");
        (
            status,
            Json(serde_json::json!({ "message": self.to_string() })),
        )
            .into_response()
    }
}
