//! # f3s-service
//!
//! Stateless services behind the public site's API routes.
//!
//! - `generator`: UUID, password, username, address, and JWT generators
//! - `catalog`: game list and item search over the static JSON catalog

pub mod catalog;
pub mod generator;

pub use catalog::{Catalog, CatalogService, ItemFilter, ItemQuery, ItemSearchResult};
pub use generator::{GeneratedJwt, GeneratorService, JwtGeneratorConfig};
