use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::EntityController;
use crate::models::{Entity, EntityKind};
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extractors::FilterQuery;

pub fn create_entity_router() -> Router<AppState> {
    Router::new()
        .route("/vehicles", get(get_vehicles))
        .route("/personnel", get(get_personnel))
}

async fn get_vehicles(
    State(state): State<AppState>,
    FilterQuery(filters): FilterQuery,
) -> AppResult<Json<Vec<Entity>>> {
    let controller = EntityController::new(state.entities.clone());
    Ok(Json(controller.query(EntityKind::Vehicle, filters).await?))
}

async fn get_personnel(
    State(state): State<AppState>,
    FilterQuery(filters): FilterQuery,
) -> AppResult<Json<Vec<Entity>>> {
    let controller = EntityController::new(state.entities.clone());
    Ok(Json(controller.query(EntityKind::Person, filters).await?))
}
