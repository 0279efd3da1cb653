use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use gate_core::Identity;

/// Typed extractor for the identity the auth gate attached to the request.
///
/// Handlers behind the gate take `CurrentIdentity(identity)` as an argument.
/// If the extension is absent the route was wired without the gate — that is
/// a programming error, rejected with a 500 rather than treated as a
/// recoverable condition.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Identity);

/// Rejection for [`CurrentIdentity`]: the gate never ran on this request.
#[derive(Debug, Clone, Copy)]
pub struct IdentityRejection;

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "message": "identity missing from request extensions"
            })),
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(CurrentIdentity)
            .ok_or(IdentityRejection)
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;

    use super::*;

    #[tokio::test]
    async fn extracts_identity_from_extensions() {
        let user: gate_core::User =
            serde_json::from_str(r#"{"id":1,"uuid":"uuid-1","role":1}"#).expect("decodes");
        let identity = Identity::new(user, "app-key");

        let request = Request::builder().body(Body::empty()).expect("request");
        let (mut parts, _) = request.into_parts();
        parts.extensions.insert(identity);

        let extracted = CurrentIdentity::from_request_parts(&mut parts, &())
            .await
            .expect("identity present");
        assert_eq!(extracted.0.user_uuid, "uuid-1");
        assert_eq!(extracted.0.app_key, "app-key");
    }

    #[tokio::test]
    async fn rejects_when_gate_never_ran() {
        let request = Request::builder().body(Body::empty()).expect("request");
        let (mut parts, _) = request.into_parts();

        let result = CurrentIdentity::from_request_parts(&mut parts, &()).await;
        assert!(result.is_err());

        let response = result.expect_err("rejection").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
