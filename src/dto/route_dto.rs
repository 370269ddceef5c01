use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Coordinate, SiteRecord, Waypoint};

/// Cuerpo de `POST /api/route`
#[derive(Debug, Deserialize, Validate)]
pub struct PlanRouteRequest {
    #[validate(length(max = 100))]
    pub sites: Vec<SiteRecord>,
}

/// Sitios geocodificados y el trazado armado entre ellos
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlanResponse {
    pub waypoints: Vec<Waypoint>,
    pub route: Vec<Coordinate>,
    pub center: Coordinate,
    pub tile_url: String,
}
