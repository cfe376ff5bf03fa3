//! Client session configuration.

use serde::{Deserialize, Serialize};

/// Session lifecycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Path of the persistent session file used by the CLI.
    #[serde(default = "default_store_path")]
    pub store_path: String,
    /// Refresh proactively when fewer than this many seconds remain.
    #[serde(default = "default_proactive_refresh")]
    pub proactive_refresh_seconds: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            proactive_refresh_seconds: default_proactive_refresh(),
        }
    }
}

fn default_store_path() -> String {
    "data/session.json".to_string()
}

fn default_proactive_refresh() -> i64 {
    300
}
