//! Server, site, and CORS configuration.

use serde::{Deserialize, Serialize};

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Maximum accepted request body in bytes.
    #[serde(default = "default_body_limit")]
    pub body_limit_bytes: usize,
    /// CORS configuration.
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
            body_limit_bytes: default_body_limit(),
            cors: CorsConfig::default(),
        }
    }
}

/// Public site configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Canonical site origin (OAuth callbacks, metadata).
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Locale used when none is given.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Supported locales.
    #[serde(default = "default_locales")]
    pub locales: Vec<String>,
    /// Path segment of the admin login page, below the locale.
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

impl SiteConfig {
    /// Localized login route, e.g. `/en/admin`.
    pub fn login_route(&self, locale: &str) -> String {
        format!("/{}/{}", locale, self.login_path.trim_matches('/'))
    }

    /// Returns `locale` if supported, otherwise the default locale.
    pub fn resolve_locale<'a>(&'a self, locale: &'a str) -> &'a str {
        if self.locales.iter().any(|l| l == locale) {
            locale
        } else {
            &self.default_locale
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            default_locale: default_locale(),
            locales: default_locales(),
            login_path: default_login_path(),
        }
    }
}

/// CORS (Cross-Origin Resource Sharing) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins (use `["*"]` for development only).
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    /// Allowed HTTP methods.
    #[serde(default = "default_allowed_methods")]
    pub allowed_methods: Vec<String>,
    /// Allowed HTTP headers.
    #[serde(default = "default_allowed_headers")]
    pub allowed_headers: Vec<String>,
    /// Max age for preflight cache in seconds.
    #[serde(default = "default_max_age")]
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            allowed_methods: default_allowed_methods(),
            allowed_headers: default_allowed_headers(),
            max_age_seconds: default_max_age(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_body_limit() -> usize {
    1024 * 1024
}

fn default_origin() -> String {
    "http://localhost:3000".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_locales() -> Vec<String> {
    vec!["en".to_string(), "pt".to_string(), "es".to_string()]
}

fn default_login_path() -> String {
    "admin".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_allowed_methods() -> Vec<String> {
    vec![
        "GET".to_string(),
        "POST".to_string(),
        "PUT".to_string(),
        "DELETE".to_string(),
        "PATCH".to_string(),
        "OPTIONS".to_string(),
    ]
}

fn default_allowed_headers() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_max_age() -> u64 {
    3600
}
