use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;

use gate_client::{SsoClient, APP_HEADER, TOKEN_HEADER};
use gate_core::Identity;

use crate::headers::header_str;
use crate::render::{AbortRender, JsonAbort};

/// The auth gate: forwards the inbound credential to the upstream sync
/// endpoint and attaches the decoded identity to the request.
///
/// Per-request flow, linear with early exits:
/// 1. read `token` and `app` headers (missing reads as empty — sent anyway,
///    the upstream decides what an empty token means)
/// 2. `POST /user/sync`; transport or decode failure aborts 500
/// 3. upstream status outside 200/201 aborts with that status and the
///    upstream's message
/// 4. the decoded user's token is overwritten with the inbound token and the
///    [`Identity`] is inserted into request extensions
/// 5. with `admin_only` set, a role above the admin threshold aborts 401
///    `Admin only`
/// 6. the wrapped handler runs
///
/// Aborts render through the injected [`AbortRender`]; the wrapped handler
/// never runs on an abort.
#[derive(Clone)]
pub struct AuthGate {
    client: SsoClient,
    admin_only: bool,
    render: Arc<dyn AbortRender>,
}

impl AuthGate {
    /// Gate with no role restriction and the JSON abort renderer.
    #[must_use]
    pub fn new(client: SsoClient) -> Self {
        Self {
            client,
            admin_only: false,
            render: Arc::new(JsonAbort),
        }
    }

    /// Restrict the gated routes to admin roles.
    #[must_use]
    pub fn admin_only(mut self, admin_only: bool) -> Self {
        self.admin_only = admin_only;
        self
    }

    /// Swap the rejection formatter.
    #[must_use]
    pub fn with_render(mut self, render: Arc<dyn AbortRender>) -> Self {
        self.render = render;
        self
    }

    /// Wrap every route of the router with this gate.
    #[must_use]
    pub fn apply<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.layer(middleware::from_fn_with_state(self, auth_gate))
    }
}

async fn auth_gate(State(gate): State<AuthGate>, mut req: Request, next: Next) -> Response {
    let token = header_str(req.headers(), TOKEN_HEADER);
    let app_key = header_str(req.headers(), APP_HEADER);

    let outcome = match gate.client.sync(&token, &app_key).await {
        Ok(outcome) => outcome,
        Err(error) => {
            tracing::warn!(error = %error, "auth sync failed");
            return gate
                .render
                .render(StatusCode::INTERNAL_SERVER_ERROR, &error.to_string());
        }
    };

    if !outcome.is_success() {
        let status = StatusCode::from_u16(outcome.status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return gate.render.render(status, &outcome.envelope.message);
    }

    let Some(mut user) = outcome.envelope.user else {
        tracing::warn!(status = outcome.status, "sync response missing user");
        return gate
            .render
            .render(StatusCode::INTERNAL_SERVER_ERROR, "sync response missing user");
    };

    // The upstream payload's token field, if any, is discarded.
    user.token = token;

    let is_admin = user.is_admin();
    req.extensions_mut().insert(Identity::new(user, app_key));

    if gate.admin_only && !is_admin {
        return gate.render.render(StatusCode::UNAUTHORIZED, "Admin only");
    }

    next.run(req).await
}
