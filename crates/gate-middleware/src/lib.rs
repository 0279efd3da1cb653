//! # gate-middleware
//!
//! Axum middleware for Gatehouse:
//! - [`AuthGate`] — the per-request auth check against the upstream SSO
//!   service, with an optional admin-only restriction
//! - [`CurrentIdentity`] — typed extractor for the identity the gate attached
//! - [`AbortRender`] — pluggable formatter for gate rejections (JSON default)
//! - [`UsageLayer`] — detached, fire-and-forget activity logging
//!
//! The gate must wrap any route whose handler reads [`CurrentIdentity`] or
//! performs data-fetch calls; reaching such a handler without the gate is a
//! programming error and rejects with a 500.

mod extract;
mod gate;
mod headers;
mod render;
mod usage;

pub use extract::{CurrentIdentity, IdentityRejection};
pub use gate::AuthGate;
pub use render::{AbortRender, JsonAbort};
pub use usage::{UsageErrorHook, UsageLayer, WarnHook};
