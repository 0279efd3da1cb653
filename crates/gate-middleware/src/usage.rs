use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;

use gate_client::{ClientError, SsoClient, APP_HEADER, TOKEN_HEADER};
use gate_core::UsageRecord;

use crate::headers::header_str;

/// Sink for failures of the detached activity-log call.
///
/// A usage failure has no bearing on the primary response, which is already
/// in flight; the hook is the only place such a failure is observable.
pub trait UsageErrorHook: Send + Sync + 'static {
    fn on_error(&self, error: &ClientError);
}

/// Default hook: log a warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct WarnHook;

impl UsageErrorHook for WarnHook {
    fn on_error(&self, error: &ClientError) {
        tracing::warn!(error = %error, "usage log call failed");
    }
}

/// Fire-and-forget activity logging.
///
/// Describes each inbound request (method, path, peer address, credential
/// headers) and posts it to the activity log on a detached task. The wrapped
/// handler runs without waiting; ordering between the logging call and the
/// primary response is unspecified.
#[derive(Clone)]
pub struct UsageLayer {
    client: SsoClient,
    hook: Arc<dyn UsageErrorHook>,
}

impl UsageLayer {
    #[must_use]
    pub fn new(client: SsoClient) -> Self {
        Self {
            client,
            hook: Arc::new(WarnHook),
        }
    }

    /// Swap the error hook.
    #[must_use]
    pub fn with_hook(mut self, hook: Arc<dyn UsageErrorHook>) -> Self {
        self.hook = hook;
        self
    }

    /// Wrap every route of the router with usage logging.
    #[must_use]
    pub fn apply<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.layer(middleware::from_fn_with_state(self, usage_middleware))
    }
}

async fn usage_middleware(State(layer): State<UsageLayer>, req: Request, next: Next) -> Response {
    let record = UsageRecord {
        token: header_str(req.headers(), TOKEN_HEADER),
        app_key: header_str(req.headers(), APP_HEADER),
        endpoint: req.uri().path().to_string(),
        method: req.method().to_string(),
        address: req
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0.to_string())
            .unwrap_or_default(),
    };

    let client = layer.client.clone();
    let hook = Arc::clone(&layer.hook);
    tokio::spawn(async move {
        if let Err(error) = client.log_usage(&record).await {
            hook.on_error(&error);
        }
    });

    next.run(req).await
}
