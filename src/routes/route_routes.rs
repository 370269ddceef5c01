use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::RouteController;
use crate::dto::{PlanRouteRequest, RoutePlanResponse};
use crate::state::AppState;
use crate::utils::errors::AppResult;
use crate::utils::extractors::ApiJson;

pub fn create_route_router() -> Router<AppState> {
    Router::new().route("/route", post(plan_route))
}

async fn plan_route(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<PlanRouteRequest>,
) -> AppResult<Json<RoutePlanResponse>> {
    let controller = RouteController::new(&state.route_assembler, &state.config.tile_url_template);
    Ok(Json(controller.plan(request).await?))
}
