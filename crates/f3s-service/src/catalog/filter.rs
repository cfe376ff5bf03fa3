//! Item filtering and facet extraction.

use serde::{Deserialize, Serialize};

use super::model::{CatalogItem, Game};

/// Raw query-string parameters of an item search.
///
/// List parameters are comma-separated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemQuery {
    pub search: Option<String>,
    pub types: Option<String>,
    pub vocations: Option<String>,
    pub elements: Option<String>,
    pub min_level: Option<i64>,
    pub max_level: Option<i64>,
}

/// A parsed item search. Empty lists and absent bounds match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub search: Option<String>,
    pub types: Vec<String>,
    pub vocations: Vec<String>,
    pub elements: Vec<String>,
    pub min_level: Option<i64>,
    pub max_level: Option<i64>,
}

impl ItemFilter {
    /// Parses `query`, falling back to `default_min_level` when the caller
    /// sends no lower bound.
    pub fn from_query(query: ItemQuery, default_min_level: Option<i64>) -> Self {
        Self {
            search: query
                .search
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty()),
            types: split_list(query.types),
            vocations: split_list(query.vocations),
            elements: split_list(query.elements),
            min_level: query.min_level.or(default_min_level),
            max_level: query.max_level,
        }
    }

    /// Whether `item` passes every criterion.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        let name_ok = self
            .search
            .as_deref()
            .is_none_or(|s| item.name.to_lowercase().contains(s));
        let type_ok = self.types.is_empty() || self.types.contains(&item.item_type);
        let vocation_ok = self.vocations.is_empty()
            || item
                .item_vocations
                .iter()
                .any(|v| self.vocations.contains(&v.vocation));
        let element_ok = self.elements.is_empty()
            || item
                .item_protections
                .iter()
                .any(|p| self.elements.contains(&p.element));
        let level = item.level();
        let level_ok = self.min_level.is_none_or(|min| level >= min)
            && self.max_level.is_none_or(|max| level <= max);

        name_ok && type_ok && vocation_ok && element_ok && level_ok
    }

    /// Items passing the filter, in source order.
    pub fn apply<'a>(&self, items: &'a [CatalogItem]) -> Vec<&'a CatalogItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

fn split_list(raw: Option<String>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Distinct non-empty values offered as filter options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    pub vocations: Vec<String>,
    pub types: Vec<String>,
    pub elements: Vec<String>,
}

impl Facets {
    /// Collects facets over `items` in first-seen order.
    pub fn collect(items: &[CatalogItem]) -> Self {
        let mut facets = Self::default();
        for item in items {
            push_unique(&mut facets.types, &item.item_type);
            for v in &item.item_vocations {
                push_unique(&mut facets.vocations, &v.vocation);
            }
            for p in &item.item_protections {
                push_unique(&mut facets.elements, &p.element);
            }
        }
        facets
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

/// Games whose name contains `search`, ignoring case. Blank matches all.
pub fn filter_games<'a>(games: &'a [Game], search: Option<&str>) -> Vec<&'a Game> {
    let needle = search.map(|s| s.trim().to_lowercase()).unwrap_or_default();
    games
        .iter()
        .filter(|g| needle.is_empty() || g.name.to_lowercase().contains(&needle))
        .collect()
}
