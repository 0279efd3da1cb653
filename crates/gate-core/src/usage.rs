/// A transient description of one HTTP call for the activity log.
///
/// Built by the usage layer from the inbound request, forwarded as headers on
/// `POST /activity/log`, never persisted locally.
#[derive(Debug, Clone)]
pub struct UsageRecord {
    /// Bearer token from the inbound request.
    pub token: String,
    /// Caller's application key.
    pub app_key: String,
    /// Request path, e.g. `/team`.
    pub endpoint: String,
    /// Request method, e.g. `GET`.
    pub method: String,
    /// Peer address when known, empty otherwise.
    pub address: String,
}
