use crate::user::User;

/// Typed per-request identity for cross-crate passing.
///
/// Produced by the auth gate in `gate-middleware`, consumed by handlers and
/// by the `gate-client` data-fetch calls. Contains only data fields — no
/// auth logic, no upstream calls. Replaces the stringly-keyed context bag of
/// earlier incarnations of this middleware.
#[derive(Debug, Clone)]
pub struct Identity {
    /// The decoded user, with `token` overwritten to the inbound token.
    pub user: User,
    /// Duplicate of `user.uuid` for convenient lookup.
    pub user_uuid: String,
    /// Caller-supplied tenant/application key, forwarded verbatim upstream.
    pub app_key: String,
}

impl Identity {
    /// Build an identity from a decoded user and the caller's app key.
    #[must_use]
    pub fn new(user: User, app_key: impl Into<String>) -> Self {
        let user_uuid = user.uuid.clone();
        Self {
            user,
            user_uuid,
            app_key: app_key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_duplicates_uuid() {
        let user: User =
            serde_json::from_str(r#"{"id":1,"uuid":"uuid-1","role":2}"#).expect("decodes");
        let identity = Identity::new(user, "app-key");
        assert_eq!(identity.user_uuid, "uuid-1");
        assert_eq!(identity.user.uuid, "uuid-1");
        assert_eq!(identity.app_key, "app-key");
    }
}
