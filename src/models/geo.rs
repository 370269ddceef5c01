//! Primitivas geográficas compartidas por el geocodificador y el armado de rutas.

use serde::{Deserialize, Serialize};

use super::entity::{SiteRecord, SiteStatus};

/// Par `(lat, lon)`, serializado como arreglo de dos elementos.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl From<Coordinate> for (f64, f64) {
    fn from(c: Coordinate) -> Self {
        (c.lat, c.lon)
    }
}

/// Sitio visitado con la coordenada que le asignó el geocodificador.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waypoint {
    pub name: String,
    pub status: SiteStatus,
    pub time: String,
    pub coordinate: Coordinate,
}

impl Waypoint {
    pub fn from_site(site: &SiteRecord, coordinate: Coordinate) -> Self {
        Self {
            name: site.name.clone(),
            status: site.status.clone(),
            time: site.time.clone(),
            coordinate,
        }
    }
}

/// Puntos decodificados de una respuesta de ruteo.
pub type RouteSegment = Vec<Coordinate>;

/// Tramos concatenados sin los puntos de unión duplicados.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AssembledRoute {
    points: Vec<Coordinate>,
}

impl AssembledRoute {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agregar un tramo. Todo tramo posterior al primero agregado pierde su
    /// primer punto, que repite el último del tramo anterior.
    pub fn append_segment(&mut self, segment: RouteSegment) {
        if self.points.is_empty() {
            self.points.extend(segment);
        } else {
            self.points.extend(segment.into_iter().skip(1));
        }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }
}
