//! Virtual assistant configuration.

use serde::{Deserialize, Serialize};

/// Settings for the externally hosted virtual-assistant service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Message endpoint of the assistant service.
    #[serde(default = "default_url")]
    pub url: String,
    /// Locale sent when the caller gives none.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            default_locale: default_locale(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_url() -> String {
    "http://localhost:3001/va/message".to_string()
}

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_timeout() -> u64 {
    30
}
