//! Geocodificación de sitios
//!
//! Los nombres de sitio vienen de un conjunto cerrado de depósitos y
//! paradas: la geocodificación es una búsqueda estática. Los nombres
//! desconocidos resuelven a la coordenada de respaldo.

use std::collections::HashMap;

use crate::models::{Coordinate, SiteRecord, Waypoint};

/// Coordenada para sitios desconocidos y centro por defecto del mapa
pub const FALLBACK_COORDINATE: Coordinate = Coordinate::new(19.0760, 72.8777);

const KNOWN_SITES: &[(&str, Coordinate)] = &[
    ("Bandra Depot", Coordinate::new(19.0602, 72.8347)),
    ("Andheri Checkpoint", Coordinate::new(19.1197, 72.8468)),
    ("Powai Garage", Coordinate::new(19.1205, 72.9095)),
    ("Kurla Circle", Coordinate::new(19.0726, 72.8822)),
    ("Worli Yard", Coordinate::new(19.0176, 72.8562)),
    ("CP Parking", Coordinate::new(28.6315, 77.2167)),
    ("Rajouri Garage", Coordinate::new(28.6448, 77.1236)),
    ("Karol Bagh Lot", Coordinate::new(28.6517, 77.1908)),
    ("Lajpat Stand", Coordinate::new(28.5708, 77.2432)),
    ("Saket Stand", Coordinate::new(28.5224, 77.2207)),
];

#[derive(Debug, Clone)]
pub struct GeocodingService {
    table: HashMap<String, Coordinate>,
    fallback: Coordinate,
}

impl Default for GeocodingService {
    fn default() -> Self {
        Self::with_entries(KNOWN_SITES.iter().map(|(name, c)| (name.to_string(), *c)))
    }
}

impl GeocodingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: impl IntoIterator<Item = (String, Coordinate)>) -> Self {
        Self {
            table: entries.into_iter().collect(),
            fallback: FALLBACK_COORDINATE,
        }
    }

    /// Búsqueda exacta, sensible a mayúsculas. Nunca falla.
    pub fn geocode(&self, name: &str) -> Coordinate {
        match self.table.get(name) {
            Some(coordinate) => *coordinate,
            None => {
                log::debug!("🗺️ Sitio desconocido '{}', usando coordenada de respaldo", name);
                self.fallback
            }
        }
    }

    /// Asignar una coordenada a cada sitio, respetando el orden de visita.
    pub fn geocode_sites(&self, sites: &[SiteRecord]) -> Vec<Waypoint> {
        sites
            .iter()
            .map(|site| Waypoint::from_site(site, self.geocode(&site.name)))
            .collect()
    }

    pub fn fallback(&self) -> Coordinate {
        self.fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SiteStatus;

    #[test]
    fn known_sites_resolve_to_their_coordinates() {
        let geocoder = GeocodingService::new();
        assert_eq!(geocoder.geocode("Powai Garage"), Coordinate::new(19.1205, 72.9095));
        assert_eq!(geocoder.geocode("Saket Stand"), Coordinate::new(28.5224, 77.2207));
    }

    #[test]
    fn unknown_or_miscased_names_fall_back() {
        let geocoder = GeocodingService::new();
        assert_eq!(geocoder.geocode("Nowhere"), FALLBACK_COORDINATE);
        assert_eq!(geocoder.geocode("bandra depot"), FALLBACK_COORDINATE);
        assert_eq!(geocoder.geocode(""), FALLBACK_COORDINATE);
    }

    #[test]
    fn geocode_sites_keeps_order_and_site_fields() {
        let sites = vec![
            SiteRecord { name: "Worli Yard".into(), status: SiteStatus::Alert, time: "09:10".into() },
            SiteRecord { name: "Unknown".into(), status: SiteStatus::Normal, time: "09:40".into() },
        ];
        let waypoints = GeocodingService::new().geocode_sites(&sites);

        assert_eq!(waypoints.len(), 2);
        assert_eq!(waypoints[0].name, "Worli Yard");
        assert_eq!(waypoints[0].status, SiteStatus::Alert);
        assert_eq!(waypoints[0].coordinate, Coordinate::new(19.0176, 72.8562));
        assert_eq!(waypoints[1].time, "09:40");
        assert_eq!(waypoints[1].coordinate, FALLBACK_COORDINATE);
    }
}
