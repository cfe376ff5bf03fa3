//! Shared application state passed to every handler.

use std::sync::Arc;

use f3s_client::AssistantClient;
use f3s_core::AppResult;
use f3s_core::config::AppConfig;
use f3s_service::{CatalogService, GeneratorService};

/// Services reachable from handlers through `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Random data generators.
    pub generators: Arc<GeneratorService>,
    /// Game catalog queries.
    pub catalog: Arc<CatalogService>,
    /// Virtual assistant proxy.
    pub assistant: Arc<AssistantClient>,
}

impl AppState {
    /// Builds every service from `config`, loading the catalog from disk.
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let generators = GeneratorService::new(config.generators.clone());
        let catalog = CatalogService::load(&config.catalog).await?;
        let assistant = AssistantClient::new(config.assistant.clone())?;

        Ok(Self {
            config: Arc::new(config),
            generators: Arc::new(generators),
            catalog: Arc::new(catalog),
            assistant: Arc::new(assistant),
        })
    }
}
