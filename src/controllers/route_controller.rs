use validator::Validate;

use crate::dto::{PlanRouteRequest, RoutePlanResponse};
use crate::services::RouteAssemblyService;
use crate::utils::errors::AppResult;

pub struct RouteController<'a> {
    assembler: &'a RouteAssemblyService,
    tile_url: &'a str,
}

impl<'a> RouteController<'a> {
    pub fn new(assembler: &'a RouteAssemblyService, tile_url: &'a str) -> Self {
        Self { assembler, tile_url }
    }

    /// Geocodificar los sitios y armar la ruta que los recorre.
    /// Un tramo fallido solo acorta la ruta; nunca hace fallar la petición.
    pub async fn plan(&self, request: PlanRouteRequest) -> AppResult<RoutePlanResponse> {
        request.validate()?;

        let plan = self.assembler.plan_sites(&request.sites).await;
        Ok(RoutePlanResponse {
            waypoints: plan.waypoints,
            route: plan.route.into_points(),
            center: plan.center,
            tile_url: self.tile_url.to_string(),
        })
    }
}
