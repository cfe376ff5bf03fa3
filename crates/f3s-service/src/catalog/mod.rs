//! Game catalog backed by static JSON files.

pub mod filter;
pub mod loader;
pub mod model;
pub mod service;

pub use filter::{Facets, ItemFilter, ItemQuery};
pub use loader::Catalog;
pub use model::{CatalogItem, Game, ItemProtection, ItemVocation};
pub use service::{CatalogService, ItemSearchResult};
