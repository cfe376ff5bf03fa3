//! Data generator configuration.

use serde::{Deserialize, Serialize};

/// Settings for the stateless generator endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorsConfig {
    /// Password length used when the caller gives none.
    #[serde(default = "default_password_length")]
    pub password_default_length: usize,
    /// Smallest accepted password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Largest accepted password length.
    #[serde(default = "default_password_max")]
    pub password_max_length: usize,
    /// `iss` claim of generated JWTs.
    #[serde(default = "default_issuer")]
    pub jwt_issuer: String,
    /// `aud` claim of generated JWTs.
    #[serde(default = "default_audience")]
    pub jwt_audience: Vec<String>,
}

impl Default for GeneratorsConfig {
    fn default() -> Self {
        Self {
            password_default_length: default_password_length(),
            password_min_length: default_password_min(),
            password_max_length: default_password_max(),
            jwt_issuer: default_issuer(),
            jwt_audience: default_audience(),
        }
    }
}

fn default_password_length() -> usize {
    16
}

fn default_password_min() -> usize {
    4
}

fn default_password_max() -> usize {
    128
}

fn default_issuer() -> String {
    "https://f3ssoftware.com".to_string()
}

fn default_audience() -> Vec<String> {
    vec![
        "https://f3ssoftware.com/api".to_string(),
        "https://f3ssoftware.com/web".to_string(),
    ]
}
