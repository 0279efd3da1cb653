//! Response envelopes for the upstream SSO endpoints.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// Envelope returned by `POST /user/sync`.
///
/// `user` is absent when the upstream rejects the credential; the gate reads
/// `message` in that case and forwards it with the upstream status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Envelope returned by the list endpoints (`/team/list`, `/users/list`,
/// `/team/pluck`).
///
/// `users` defaults so a payload without the key decodes to an empty vector,
/// and an empty vector always encodes as `[]`, never `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListEnvelope {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub users: Vec<User>,
}
