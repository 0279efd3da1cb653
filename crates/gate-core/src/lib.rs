//! # gate-core
//!
//! Core types shared across the Gatehouse crates:
//! - `User` and `Organization` records as the upstream SSO service returns them
//! - Response envelopes for the sync and list endpoints
//! - The typed `Identity` request context produced by the auth gate
//! - The `UsageRecord` describing one call for the activity log
//!
//! No HTTP or async code lives here — data fields and serde only.

pub mod envelope;
pub mod identity;
pub mod usage;
pub mod user;

pub use envelope::{SyncEnvelope, UserListEnvelope};
pub use identity::Identity;
pub use usage::UsageRecord;
pub use user::{Organization, User};
