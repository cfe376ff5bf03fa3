//! Post categories.

use serde::{Deserialize, Serialize};

use f3s_core::AppResult;

use super::Enveloped;
use crate::client::ApiClient;

/// Page size the admin screens use to fetch every category at once.
pub const ALL_CATEGORIES_LIMIT: u64 = 100;

/// A post category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Deserialize)]
struct CategoryList {
    #[serde(default)]
    categories: Vec<Category>,
}

/// `categories` resource.
#[derive(Debug, Clone)]
pub struct CategoriesApi {
    client: ApiClient,
}

impl CategoriesApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Lists up to `limit` categories.
    pub async fn list(&self, limit: u64) -> AppResult<Vec<Category>> {
        let body: Enveloped<CategoryList> = self
            .client
            .get_with_query("categories", &[("limit", limit.to_string())])
            .await?;
        Ok(body.into_inner().categories)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::Json;
    use axum::extract::RawQuery;
    use axum::routing::get;
    use serde_json::json;

    use f3s_auth::session::MemorySessionStore;
    use f3s_core::config::BackendConfig;

    use super::*;
    use crate::test_support::spawn_stub;

    #[tokio::test]
    async fn test_list_reads_both_envelopes() {
        let (base_url, recorded) = spawn_stub(|recorded| {
            axum::Router::new().route(
                "/api/v1/categories",
                get(move |RawQuery(query): RawQuery| {
                    let recorded = recorded.clone();
                    async move {
                        recorded.lock().unwrap().push(query.unwrap_or_default());
                        Json(json!({ "data": { "categories": [
                            { "id": "1", "name": "News", "slug": "news" },
                            { "id": "2", "name": "Tips", "is_active": false }
                        ] } }))
                    }
                }),
            )
        })
        .await;
        let client = ApiClient::new(
            BackendConfig { base_url, ..BackendConfig::default() },
            Arc::new(MemorySessionStore::new()),
        )
        .unwrap();

        let categories = CategoriesApi::new(client).list(ALL_CATEGORIES_LIMIT).await.unwrap();

        assert_eq!(categories.len(), 2);
        assert!(categories[0].is_active);
        assert!(!categories[1].is_active);
        assert_eq!(recorded.lock().unwrap()[0], "limit=100");
    }
}
