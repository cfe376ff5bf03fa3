//! External REST backend configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the versioned REST backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend, without the API prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Version prefix every relative endpoint is placed under.
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Federated-identity session token used when no local token is valid.
    #[serde(default)]
    pub federated_token: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_prefix: default_api_prefix(),
            timeout_seconds: default_timeout(),
            federated_token: None,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_api_prefix() -> String {
    "/api/v1".to_string()
}

fn default_timeout() -> u64 {
    30
}
