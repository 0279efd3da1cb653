use serde::{Deserialize, Serialize};

/// Roles at or below this value carry admin privilege. Lower numeric role
/// means higher privilege in the upstream contract.
const ADMIN_ROLE_THRESHOLD: i64 = 1;

/// A user record as the upstream SSO service returns it.
///
/// Immutable from this system's perspective except for `token`, which the
/// auth gate overwrites with the inbound request's token after the sync call
/// returns. The upstream payload's token field, if any, is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Globally unique string identifier.
    pub uuid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    /// Integer privilege marker. `0`/`1` = elevated, `> 1` = standard.
    pub role: i64,
    /// Bearer token. Populated locally from the inbound request, never from
    /// the upstream payload.
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
    #[serde(default)]
    pub deleted_at: i64,
    #[serde(default)]
    pub organization: Organization,
    /// All organizations the user belongs to. Only the richer upstream
    /// variant populates this; older deployments omit the key entirely.
    #[serde(default)]
    pub organizations: Vec<Organization>,
}

impl User {
    /// Whether the user passes the admin-only gate check.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role <= ADMIN_ROLE_THRESHOLD
    }
}

/// A tenant record owned by the upstream SSO service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub created: i64,
    /// Apps enabled for the tenant (richer upstream variant only).
    #[serde(default)]
    pub apps: Vec<String>,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub open_invite: bool,
}
