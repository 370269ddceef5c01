//! Cliente de ruteo OSRM
//!
//! Pide una ruta en auto entre dos coordenadas y devuelve, sin tocar, la
//! geometría codificada de la primera ruta.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::models::Coordinate;
use crate::utils::errors::ClientError;

/// Fuente de geometría de rutas entre dos puntos
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Polyline codificada (precisión 5) de la ruta `from` → `to`.
    async fn route_geometry(&self, from: Coordinate, to: Coordinate) -> Result<String, ClientError>;
}

#[derive(Debug, Deserialize)]
struct OsrmRouteResponse {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
struct OsrmRoute {
    geometry: String,
}

pub struct OsrmClient {
    client: Client,
    base_url: String,
}

impl OsrmClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("FleetMonitor/1.0")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// OSRM recibe pares `lon,lat`.
    pub fn route_url(&self, from: Coordinate, to: Coordinate) -> String {
        format!(
            "{}/route/v1/driving/{},{};{},{}?overview=full&geometries=polyline",
            self.base_url, from.lon, from.lat, to.lon, to.lat
        )
    }
}

/// Extraer `routes[0].geometry` del cuerpo de respuesta de OSRM.
fn extract_geometry(body: &str) -> Result<String, ClientError> {
    let parsed: OsrmRouteResponse =
        serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))?;

    match parsed.routes.into_iter().next() {
        Some(route) => Ok(route.geometry),
        None => {
            log::debug!("📭 OSRM respondió sin rutas (code: {:?})", parsed.code);
            Err(ClientError::NoRoute)
        }
    }
}

#[async_trait]
impl RoutingClient for OsrmClient {
    async fn route_geometry(&self, from: Coordinate, to: Coordinate) -> Result<String, ClientError> {
        let url = self.route_url(from, to);
        log::debug!("🌐 Pidiendo ruta: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let body = response.text().await?;
        extract_geometry(&body)
    }
}
