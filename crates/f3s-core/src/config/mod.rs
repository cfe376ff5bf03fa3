//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section; every field has a serde default so an empty file is valid.

pub mod app;
pub mod assistant;
pub mod backend;
pub mod catalog;
pub mod generators;
pub mod logging;
pub mod session;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig, SiteConfig};
pub use self::assistant::AssistantConfig;
pub use self::backend::BackendConfig;
pub use self::catalog::CatalogConfig;
pub use self::generators::GeneratorsConfig;
pub use self::logging::LoggingConfig;
pub use self::session::SessionConfig;

use crate::error::AppError;

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "NEXT_PUBLIC_API_URL";
/// Environment variable holding the canonical site origin.
pub const SITE_ORIGIN_ENV: &str = "NEXTAUTH_URL";

/// Root application configuration.
///
/// Top-level deserialization target for the merged configuration
/// (base file + environment overlay + `F3S__*` variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Public site settings (origin, locales, login route).
    #[serde(default)]
    pub site: SiteConfig,
    /// External REST backend settings.
    #[serde(default)]
    pub backend: BackendConfig,
    /// Client session settings.
    #[serde(default)]
    pub session: SessionConfig,
    /// Data generator settings.
    #[serde(default)]
    pub generators: GeneratorsConfig,
    /// Game catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Virtual assistant settings.
    #[serde(default)]
    pub assistant: AssistantConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// Merges the given file with a `config/{F3S_ENV}` overlay, then with
    /// environment variables prefixed with `F3S__`. `NEXT_PUBLIC_API_URL`
    /// and `NEXTAUTH_URL` take precedence over everything else.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let env = std::env::var("F3S_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("F3S")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("backend.base_url", std::env::var(API_URL_ENV).ok())?
            .set_override_option("site.origin", std::env::var(SITE_ORIGIN_ENV).ok())?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
