//! Game catalog handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use f3s_service::catalog::Game;
use f3s_service::{ItemQuery, ItemSearchResult};

use crate::dto::request::GamesQuery;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/games?search=
pub async fn list_games(
    State(state): State<AppState>,
    Query(query): Query<GamesQuery>,
) -> Json<Vec<Game>> {
    Json(state.catalog.games(query.search.as_deref()))
}

/// GET /api/games/{slug}/items
pub async fn search_items(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<ItemQuery>,
) -> ApiResult<Json<ItemSearchResult>> {
    let result = state.catalog.items(&slug, query)?;
    Ok(Json(result))
}
