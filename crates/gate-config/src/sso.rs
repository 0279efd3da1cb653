//! Upstream SSO service configuration.

use serde::{Deserialize, Serialize};

/// Default upstream base URL (the production host).
fn default_base_url() -> String {
    "https://sso.gatehouse.example.com/api/v1".to_string()
}

/// Default upstream request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SsoConfig {
    /// Base URL of the upstream SSO API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout for upstream calls, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SsoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = SsoConfig::default();
        assert_eq!(config.base_url, "https://sso.gatehouse.example.com/api/v1");
        assert_eq!(config.timeout_secs, 30);
    }
}
