use std::time::Duration;

use serde::Serialize;

use gate_config::SsoConfig;
use gate_core::{Identity, SyncEnvelope, UsageRecord, User, UserListEnvelope};

use crate::error::ClientError;

/// Header carrying the bearer credential, forwarded verbatim upstream.
pub const TOKEN_HEADER: &str = "token";
/// Header carrying the caller's application key.
pub const APP_HEADER: &str = "app";

const ENDPOINT_HEADER: &str = "endpoint";
const METHOD_HEADER: &str = "method";
const ADDRESS_HEADER: &str = "address";

/// Result of the auth-check call. The caller branches on `status`; the
/// client itself draws no conclusion from it.
#[derive(Debug, Clone)]
pub struct SyncOutcome {
    /// Raw upstream HTTP status.
    pub status: u16,
    pub envelope: SyncEnvelope,
}

impl SyncOutcome {
    /// Whether the upstream accepted the credential (200 or 201).
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.status, 200 | 201)
    }
}

/// Pluck request body. The upstream expects the identifiers comma-joined in
/// a single string field, attached to a GET request.
#[derive(Debug, Serialize)]
struct PluckBody {
    user_ids: String,
}

/// Configured handle for the upstream SSO API.
///
/// Cheap to clone — the inner `reqwest::Client` is reference counted. Safe
/// to share across requests; nothing here is mutable after construction.
#[derive(Debug, Clone)]
pub struct SsoClient {
    http: reqwest::Client,
    base_url: String,
}

impl SsoClient {
    /// Build a client from the `[sso]` config section.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Build` if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &SsoConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The configured upstream base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Auth check: `POST {base}/user/sync` with the raw inbound credential.
    ///
    /// Unlike the data-fetch calls this takes the token and app key directly,
    /// because it runs before any identity exists on the request. Returns the
    /// upstream status alongside the decoded envelope so the gate can branch.
    ///
    /// # Errors
    ///
    /// `ClientError::Transport` if the upstream is unreachable,
    /// `ClientError::Decode` if the body is not a sync envelope.
    pub async fn sync(&self, token: &str, app_key: &str) -> Result<SyncOutcome, ClientError> {
        let url = format!("{}/user/sync", self.base_url);
        let resp = self
            .http
            .post(&url)
            .header(TOKEN_HEADER, token)
            .header(APP_HEADER, app_key)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = resp.text().await?;
        let envelope: SyncEnvelope = serde_json::from_str(&body)
            .map_err(|e| ClientError::Decode(format!("user/sync: {e}")))?;

        Ok(SyncOutcome { status, envelope })
    }

    /// All users belonging to the caller's team: `GET {base}/team/list`.
    ///
    /// # Errors
    ///
    /// `ClientError::Transport` or `ClientError::Decode`.
    pub async fn team(&self, identity: &Identity) -> Result<Vec<User>, ClientError> {
        self.fetch_users("/team/list", identity, None).await
    }

    /// All users visible to the caller: `GET {base}/users/list`.
    ///
    /// # Errors
    ///
    /// `ClientError::Transport` or `ClientError::Decode`.
    pub async fn users(&self, identity: &Identity) -> Result<Vec<User>, ClientError> {
        self.fetch_users("/users/list", identity, None).await
    }

    /// Users matching the given identifiers: `GET {base}/team/pluck`.
    ///
    /// The identifiers are comma-joined into a JSON body attached to the GET
    /// request — unusual, but it is what the upstream expects.
    ///
    /// # Errors
    ///
    /// `ClientError::Transport` or `ClientError::Decode`.
    pub async fn pluck(
        &self,
        identity: &Identity,
        ids: &[String],
    ) -> Result<Vec<User>, ClientError> {
        let body = PluckBody {
            user_ids: ids.join(","),
        };
        self.fetch_users("/team/pluck", identity, Some(&body)).await
    }

    /// Report one call to the activity log: `POST {base}/activity/log`.
    ///
    /// Everything travels in headers; there is no body. The caller decides
    /// what a failure means — the primary response path never waits on this.
    ///
    /// # Errors
    ///
    /// `ClientError::Transport` if the upstream is unreachable.
    pub async fn log_usage(&self, record: &UsageRecord) -> Result<(), ClientError> {
        let url = format!("{}/activity/log", self.base_url);
        self.http
            .post(&url)
            .header(TOKEN_HEADER, &record.token)
            .header(APP_HEADER, &record.app_key)
            .header(ENDPOINT_HEADER, &record.endpoint)
            .header(METHOD_HEADER, &record.method)
            .header(ADDRESS_HEADER, &record.address)
            .send()
            .await?;
        Ok(())
    }

    /// Shared shape of the data-fetch calls: GET with the identity's token
    /// and app key as headers, decode a user-list envelope.
    ///
    /// The upstream status code is not inspected on these calls; any
    /// decodable envelope is returned as success.
    async fn fetch_users(
        &self,
        path: &str,
        identity: &Identity,
        body: Option<&PluckBody>,
    ) -> Result<Vec<User>, ClientError> {
        let url = format!("{}{path}", self.base_url);
        let mut req = self
            .http
            .get(&url)
            .header(TOKEN_HEADER, &identity.user.token)
            .header(APP_HEADER, &identity.app_key);

        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let text = resp.text().await?;
        let envelope: UserListEnvelope = serde_json::from_str(&text)
            .map_err(|e| ClientError::Decode(format!("{path}: {e}")))?;

        Ok(envelope.users)
    }
}
