//! Catalog records.
//!
//! Item files carry many game-specific columns; only the ones the filters
//! use are typed and the rest pass through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A game listed on the games page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub slug: String,
}

/// A vocation allowed to use an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemVocation {
    #[serde(default)]
    pub vocation: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An element an item protects against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemProtection {
    #[serde(default)]
    pub element: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One equipment item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    /// Required character level; absent means no requirement.
    #[serde(default)]
    pub min_level: Option<i64>,
    /// Equipment slot, assigned from the source file.
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub item_vocations: Vec<ItemVocation>,
    #[serde(default)]
    pub item_protections: Vec<ItemProtection>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogItem {
    /// The level requirement, zero when absent.
    pub fn level(&self) -> i64 {
        self.min_level.unwrap_or(0)
    }
}
