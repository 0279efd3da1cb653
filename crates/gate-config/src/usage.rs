//! Activity-log (usage reporting) configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UsageConfig {
    /// Whether the demo server applies the usage-logging layer.
    #[serde(default)]
    pub enabled: bool,
}
