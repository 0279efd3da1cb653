//! # gate-client
//!
//! Reqwest client for the upstream SSO service.
//!
//! One configured handle ([`SsoClient`]) exposes the remote calls: `sync`
//! (the auth check), `team`, `users`, `pluck`, and `log_usage`. Every trust
//! decision is delegated to the upstream — this crate performs no token
//! validation of its own, keeps no state beyond the base URL and a shared
//! `reqwest::Client`, and never retries.

mod client;
mod error;

pub use client::{SsoClient, SyncOutcome, APP_HEADER, TOKEN_HEADER};
pub use error::ClientError;
