//! Rutas HTTP
//!
//! `create_app` arma el router completo: backend de consultas, planificación
//! de rutas, verificación de login y health check.

pub mod auth_routes;
pub mod entity_routes;
pub mod route_routes;

use axum::{extract::OriginalUri, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_app(state: AppState) -> Router {
    let cors = cors_middleware(&state.config.cors_origins);

    Router::new()
        .route("/health", get(health))
        .nest(
            "/api",
            Router::new()
                .merge(entity_routes::create_entity_router())
                .merge(route_routes::create_route_router())
                .merge(auth_routes::create_auth_router()),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "fleet-monitor",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
