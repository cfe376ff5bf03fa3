//! Generator handlers. Stateless and unauthenticated.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use tracing::debug;

use f3s_core::AppError;
use f3s_service::generator::Address;
use f3s_service::{GeneratedJwt, JwtGeneratorConfig};

use crate::dto::request::{PasswordQuery, UsernameQuery};
use crate::dto::response::{PasswordResponse, UsernameResponse, UuidResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/generators/uuidGenerator
pub async fn uuid(State(state): State<AppState>) -> Json<UuidResponse> {
    Json(UuidResponse {
        uuid: state.generators.uuid(),
    })
}

/// GET /api/generators/passwordGenerator?length=N
pub async fn password(
    State(state): State<AppState>,
    Query(query): Query<PasswordQuery>,
) -> Json<PasswordResponse> {
    Json(PasswordResponse {
        password: state.generators.password(query.length()),
    })
}

/// GET /api/generators/usernameGenerator?includeNumber=bool
pub async fn username(
    State(state): State<AppState>,
    Query(query): Query<UsernameQuery>,
) -> Json<UsernameResponse> {
    Json(UsernameResponse {
        username: state.generators.username(query.include_number()),
    })
}

/// GET /api/generators/addressGenerator
pub async fn address(State(state): State<AppState>) -> Json<Address> {
    Json(state.generators.address())
}

/// GET /api/generators/jwtGenerator
pub async fn jwt_default(State(state): State<AppState>) -> ApiResult<Json<GeneratedJwt>> {
    let generated = state.generators.jwt(&JwtGeneratorConfig::default())?;
    Ok(Json(generated))
}

/// POST /api/generators/jwtGenerator
pub async fn jwt_custom(
    State(state): State<AppState>,
    body: Result<Json<JwtGeneratorConfig>, JsonRejection>,
) -> ApiResult<Json<GeneratedJwt>> {
    let Json(request) = body.map_err(|rejection| {
        debug!(error = %rejection, "Rejected JWT generator body");
        AppError::validation("Invalid request body")
    })?;

    let generated = state.generators.jwt(&request)?;
    Ok(Json(generated))
}
