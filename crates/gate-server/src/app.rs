//! Router assembly and serving for the demo server.
//!
//! Three routes, all behind the admin-only auth gate: `/auth` (ping),
//! `/team` (team listing), `/pluck` (users by identifier). The usage layer
//! is applied outermost when `[usage] enabled = true`.

use std::net::SocketAddr;

use anyhow::Context;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use gate_client::SsoClient;
use gate_config::GateConfig;
use gate_core::User;
use gate_middleware::{AuthGate, CurrentIdentity, UsageLayer};

use crate::error::AppError;

#[derive(Clone)]
struct AppState {
    client: SsoClient,
}

pub async fn serve(config: GateConfig) -> anyhow::Result<()> {
    let client = SsoClient::new(&config.sso).context("failed to build SSO client")?;
    let app = build_router(&config, client);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(%addr, upstream = %config.sso.base_url, "gate-server listening");

    // connect-info so the usage layer can record the peer address
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("server exited")?;

    Ok(())
}

fn build_router(config: &GateConfig, client: SsoClient) -> Router {
    let state = AppState {
        client: client.clone(),
    };

    let mut router = Router::new()
        .route("/auth", get(ping).post(ping))
        .route("/team", get(team))
        .route("/pluck", get(pluck))
        .with_state(state);

    router = AuthGate::new(client.clone()).admin_only(true).apply(router);

    if config.usage.enabled {
        router = UsageLayer::new(client).apply(router);
    }

    router
}

async fn ping() -> &'static str {
    "ok"
}

async fn team(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.client.team(&identity).await?))
}

#[derive(Debug, Deserialize)]
struct PluckParams {
    #[serde(default)]
    ids: String,
}

async fn pluck(
    State(state): State<AppState>,
    Query(params): Query<PluckParams>,
    CurrentIdentity(identity): CurrentIdentity,
) -> Result<Json<Vec<User>>, AppError> {
    let ids = parse_ids(&params.ids);
    Ok(Json(state.client.pluck(&identity, &ids).await?))
}

/// Split `?ids=a,b,c` into identifiers, dropping empty segments.
fn parse_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
