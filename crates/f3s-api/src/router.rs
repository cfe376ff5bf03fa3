//! Route definitions for the F3S HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::timeout::TimeoutLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes, the body limit, the request
/// timeout, and request logging. CORS, compression, and tracing are added by
/// [`build_app`](crate::app::build_app).
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    let api_routes = Router::new()
        .merge(generator_routes())
        .merge(catalog_routes())
        .merge(assistant_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TimeoutLayer::new(timeout))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Stateless data generators
fn generator_routes() -> Router<AppState> {
    Router::new()
        .route("/generators/uuidGenerator", get(handlers::generators::uuid))
        .route(
            "/generators/passwordGenerator",
            get(handlers::generators::password),
        )
        .route(
            "/generators/usernameGenerator",
            get(handlers::generators::username),
        )
        .route(
            "/generators/addressGenerator",
            get(handlers::generators::address),
        )
        .route(
            "/generators/jwtGenerator",
            get(handlers::generators::jwt_default).post(handlers::generators::jwt_custom),
        )
}

/// Game list and item search
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(handlers::catalog::list_games))
        .route("/games/{slug}/items", get(handlers::catalog::search_items))
}

/// Virtual assistant
fn assistant_routes() -> Router<AppState> {
    Router::new().route("/assistant/message", post(handlers::assistant::message))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
