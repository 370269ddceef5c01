use axum::{extract::State, routing::post, Json, Router};
use validator::Validate;

use crate::dto::{LoginRequest, LoginResponse};
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extractors::ApiJson;

/// Rutas de autenticación
pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    request.validate()?;
    state.auth.authenticate(&request)?;
    Ok(Json(LoginResponse::success(request.username)))
}
