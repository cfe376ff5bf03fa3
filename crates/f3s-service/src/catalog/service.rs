//! Catalog queries.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use f3s_core::config::CatalogConfig;
use f3s_core::{AppError, AppResult};

use super::filter::{Facets, ItemFilter, ItemQuery, filter_games};
use super::loader::Catalog;
use super::model::{CatalogItem, Game};

/// Result of an item search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSearchResult {
    pub game: Game,
    pub total: usize,
    pub items: Vec<CatalogItem>,
    pub facets: Facets,
}

/// Read-only queries over a loaded [`Catalog`].
#[derive(Debug, Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
    default_min_level: Option<i64>,
}

impl CatalogService {
    /// Creates a service over an already loaded catalog.
    pub fn new(catalog: Arc<Catalog>, config: &CatalogConfig) -> Self {
        Self {
            catalog,
            default_min_level: config.default_min_level,
        }
    }

    /// Loads the catalog from `config.data_dir`.
    pub async fn load(config: &CatalogConfig) -> AppResult<Self> {
        let catalog = Catalog::load(&config.data_dir).await?;
        Ok(Self::new(Arc::new(catalog), config))
    }

    /// Games whose name contains `search`.
    pub fn games(&self, search: Option<&str>) -> Vec<Game> {
        filter_games(&self.catalog.games, search)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Items of the game `slug` matching `query`, with facets over all of
    /// the game's items.
    pub fn items(&self, slug: &str, query: ItemQuery) -> AppResult<ItemSearchResult> {
        let game = self
            .catalog
            .game(slug)
            .ok_or_else(|| AppError::not_found(format!("Game '{slug}' not found")))?;

        let all = self.catalog.items_for(slug);
        let filter = ItemFilter::from_query(query, self.default_min_level);
        let items: Vec<CatalogItem> = filter.apply(all).into_iter().cloned().collect();

        debug!(slug, total = all.len(), matched = items.len(), "Item search");
        Ok(ItemSearchResult {
            game: game.clone(),
            total: items.len(),
            items,
            facets: Facets::collect(all),
        })
    }
}
