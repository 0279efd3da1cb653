use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Formatter for gate rejections.
///
/// Injected into [`crate::AuthGate`] at construction; one method, so hosts
/// can swap the wire format of rejections without touching gate logic.
pub trait AbortRender: Send + Sync + 'static {
    fn render(&self, status: StatusCode, message: &str) -> Response;
}

/// Default renderer: `{"message": <text>}` with the given status.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonAbort;

impl AbortRender for JsonAbort {
    fn render(&self, status: StatusCode, message: &str) -> Response {
        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_abort_sets_status() {
        let response = JsonAbort.render(StatusCode::UNAUTHORIZED, "Admin only");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
