//! Armado de rutas de varios tramos
//!
//! Construye un trazado continuo a través de una lista ordenada de puntos:
//! pide cada tramo consecutivo al servicio de ruteo, uno tras otro, y une
//! las geometrías decodificadas.

use std::sync::Arc;

use serde::Serialize;

use crate::clients::RoutingClient;
use crate::models::{AssembledRoute, Coordinate, RouteSegment, SiteRecord, Waypoint};
use crate::services::geocoding_service::GeocodingService;
use crate::utils::errors::ClientError;
use crate::utils::polyline;

/// Sitios geocodificados, el trazado entre ellos y el centro del mapa
#[derive(Debug, Clone, Serialize)]
pub struct SitePlan {
    pub waypoints: Vec<Waypoint>,
    pub route: AssembledRoute,
    pub center: Coordinate,
}

#[derive(Clone)]
pub struct RouteAssemblyService {
    client: Arc<dyn RoutingClient>,
    geocoder: GeocodingService,
}

impl RouteAssemblyService {
    pub fn new(client: Arc<dyn RoutingClient>, geocoder: GeocodingService) -> Self {
        Self { client, geocoder }
    }

    /// Armar la ruta a través de `waypoints`.
    ///
    /// Los tramos se piden en secuencia y se concatenan en orden. Un tramo
    /// que falla por cualquier motivo se omite; el resto sigue aportando.
    pub async fn assemble(&self, waypoints: &[Waypoint]) -> AssembledRoute {
        let mut route = AssembledRoute::new();
        if waypoints.len() < 2 {
            return route;
        }

        for (leg, pair) in waypoints.windows(2).enumerate() {
            let (from, to) = (&pair[0], &pair[1]);
            match self.fetch_leg(from.coordinate, to.coordinate).await {
                Ok(segment) => route.append_segment(segment),
                Err(e) => log::warn!(
                    "⚠️ Omitiendo tramo {} ({} → {}): {}",
                    leg,
                    from.name,
                    to.name,
                    e
                ),
            }
        }

        log::info!(
            "🛣️ Ruta armada con {} puntos de paso: {} puntos",
            waypoints.len(),
            route.len()
        );
        route
    }

    async fn fetch_leg(&self, from: Coordinate, to: Coordinate) -> Result<RouteSegment, ClientError> {
        let geometry = self.client.route_geometry(from, to).await?;
        Ok(polyline::decode(&geometry)?)
    }

    /// Geocodificar los sitios en orden de visita y armar la ruta entre ellos.
    pub async fn plan_sites(&self, sites: &[SiteRecord]) -> SitePlan {
        let waypoints = self.geocoder.geocode_sites(sites);
        let route = self.assemble(&waypoints).await;
        let center = waypoints
            .first()
            .map(|w| w.coordinate)
            .unwrap_or_else(|| self.geocoder.fallback());

        SitePlan { waypoints, route, center }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::SiteStatus;
    use crate::services::geocoding_service::FALLBACK_COORDINATE;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Reproduce respuestas guionadas, una por tramo, y registra las llamadas.
    pub(crate) struct ScriptedRoutingClient {
        answers: Mutex<VecDeque<Result<String, ClientError>>>,
        pub calls: Mutex<Vec<(Coordinate, Coordinate)>>,
    }

    impl ScriptedRoutingClient {
        pub(crate) fn new(answers: Vec<Result<String, ClientError>>) -> Self {
            Self {
                answers: Mutex::new(answers.into()),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RoutingClient for ScriptedRoutingClient {
        async fn route_geometry(&self, from: Coordinate, to: Coordinate) -> Result<String, ClientError> {
            self.calls.lock().unwrap().push((from, to));
            self.answers
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(ClientError::NoRoute))
        }
    }

    /// Los puntos sobre la grilla 1e-5 sobreviven bit a bit a codificar/decodificar.
    fn p(n: i64) -> Coordinate {
        Coordinate::new(
            (1_900_000 + n * 1_000) as f64 / 1e5,
            (7_200_000 + n * 1_000) as f64 / 1e5,
        )
    }

    fn waypoint(name: &str, coordinate: Coordinate) -> Waypoint {
        Waypoint {
            name: name.to_string(),
            status: SiteStatus::Normal,
            time: String::new(),
            coordinate,
        }
    }

    fn service(answers: Vec<Result<String, ClientError>>) -> (RouteAssemblyService, Arc<ScriptedRoutingClient>) {
        let client = Arc::new(ScriptedRoutingClient::new(answers));
        (RouteAssemblyService::new(client.clone(), GeocodingService::new()), client)
    }

    #[tokio::test]
    async fn joint_point_is_deduplicated_once() {
        let leg_ab = polyline::encode(&[p(1), p(2), p(3)]);
        let leg_bc = polyline::encode(&[p(3), p(4), p(5)]);
        let (service, client) = service(vec![Ok(leg_ab), Ok(leg_bc)]);

        let route = service
            .assemble(&[waypoint("A", p(1)), waypoint("B", p(3)), waypoint("C", p(5))])
            .await;

        assert_eq!(route.points(), &[p(1), p(2), p(3), p(4), p(5)]);
        assert_eq!(*client.calls.lock().unwrap(), vec![(p(1), p(3)), (p(3), p(5))]);
    }

    #[tokio::test]
    async fn fewer_than_two_waypoints_yield_empty_route_without_requests() {
        let (service, client) = service(vec![]);

        assert!(service.assemble(&[]).await.is_empty());
        assert!(service.assemble(&[waypoint("A", p(1))]).await.is_empty());
        assert!(client.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_first_leg_keeps_second_leg_intact() {
        let leg_bc = polyline::encode(&[p(3), p(4), p(5)]);
        let (service, client) = service(vec![
            Err(ClientError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE)),
            Ok(leg_bc),
        ]);

        let route = service
            .assemble(&[waypoint("A", p(1)), waypoint("B", p(3)), waypoint("C", p(5))])
            .await;

        assert_eq!(route.points(), &[p(3), p(4), p(5)]);
        assert_eq!(client.calls.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn malformed_geometry_skips_only_that_leg() {
        let leg_ab = polyline::encode(&[p(1), p(2)]);
        let leg_cd = polyline::encode(&[p(3), p(4)]);
        let (service, _) = service(vec![Ok(leg_ab), Ok("_p~i".to_string()), Ok(leg_cd)]);

        let route = service
            .assemble(&[
                waypoint("A", p(1)),
                waypoint("B", p(2)),
                waypoint("C", p(3)),
                waypoint("D", p(4)),
            ])
            .await;

        // el tramo C→D va después de un tramo exitoso: pierde su primer punto
        assert_eq!(route.points(), &[p(1), p(2), p(4)]);
    }

    #[tokio::test]
    async fn all_legs_failing_yields_empty_route() {
        let (service, _) = service(vec![Err(ClientError::NoRoute), Err(ClientError::NoRoute)]);

        let route = service
            .assemble(&[waypoint("A", p(1)), waypoint("B", p(2)), waypoint("C", p(3))])
            .await;

        assert!(route.is_empty());
    }

    #[tokio::test]
    async fn plan_sites_geocodes_and_centres_on_first_site() {
        let bandra = Coordinate::new(19.0602, 72.8347);
        let andheri = Coordinate::new(19.1197, 72.8468);
        let (service, client) = service(vec![Ok(polyline::encode(&[bandra, andheri]))]);
        let sites = vec![
            SiteRecord { name: "Bandra Depot".into(), status: SiteStatus::Normal, time: "08:00".into() },
            SiteRecord { name: "Andheri Checkpoint".into(), status: SiteStatus::Alert, time: "08:40".into() },
        ];

        let plan = service.plan_sites(&sites).await;

        assert_eq!(plan.center, bandra);
        assert_eq!(plan.waypoints.len(), 2);
        assert_eq!(plan.route.len(), 2);
        assert_eq!(*client.calls.lock().unwrap(), vec![(bandra, andheri)]);
    }

    #[tokio::test]
    async fn plan_without_sites_centres_on_fallback() {
        let (service, _) = service(vec![]);
        let plan = service.plan_sites(&[]).await;

        assert!(plan.waypoints.is_empty());
        assert!(plan.route.is_empty());
        assert_eq!(plan.center, FALLBACK_COORDINATE);
    }
}
