//! View-model del dashboard de monitoreo
//!
//! Uno por tipo de entidad. Es dueño de todo el estado del panel y recalcula
//! las vistas derivadas (sitios visibles, estadísticas, mapa) a pedido,
//! después de cada transición.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::models::{Entity, EntityKind, SiteRecord};
use crate::repositories::EntitySource;
use crate::services::route_assembly_service::{RouteAssemblyService, SitePlan};

use super::date_picker::DatePicker;
use super::filter_form::{FilterField, FilterForm};
use super::site_pagination::{MonitoringStats, SitePagination};

pub const DEFAULT_MAP_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3153.181106222302!2d-122.41941568468248!3d37.77492977975917!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x80858064d25b0ffb%3A0x8c2e2df9f9e4e1ee!2sSan%20Francisco%2C%20CA!5e0!3m2!1sen!2sus!4v1623177893573!5m2!1sen!2sus";
pub const DEFAULT_LOCATION: &str = "San Francisco, CA, USA";

/// Lo que muestra el panel del mapa
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOverlay {
    pub map_url: String,
    pub name: String,
    pub id: String,
    pub location: String,
    pub status: String,
    pub last_update: String,
}

impl MapOverlay {
    pub fn for_entity(entity: &Entity) -> Self {
        if entity.is_unselected() {
            return Self {
                map_url: DEFAULT_MAP_URL.to_string(),
                name: String::new(),
                id: String::new(),
                location: DEFAULT_LOCATION.to_string(),
                status: String::new(),
                last_update: String::new(),
            };
        }

        Self {
            map_url: entity.map_url.clone(),
            name: entity.name.clone(),
            id: entity.id.clone(),
            location: entity.current_location.clone(),
            status: entity.status.clone(),
            last_update: entity.last_update.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MonitoringDashboard {
    kind: EntityKind,
    pub form: FilterForm,
    selected: Entity,
    records: Vec<Entity>,
    pagination: SitePagination,
    pub date_picker: DatePicker,
    site_map_open: bool,
}

impl MonitoringDashboard {
    pub fn new(kind: EntityKind, today: NaiveDate) -> Self {
        Self {
            kind,
            form: FilterForm::new(),
            selected: Entity::empty(),
            records: Vec::new(),
            pagination: SitePagination::default(),
            date_picker: DatePicker::new(today),
            site_map_open: false,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn selected(&self) -> &Entity {
        &self.selected
    }

    /// Todos los registros de la última consulta
    pub fn records(&self) -> &[Entity] {
        &self.records
    }

    /// Reemplazar la entidad mostrada por completo. La página vuelve a 1 y
    /// el formulario refleja la nueva entidad.
    pub fn select(&mut self, entity: Entity) {
        self.selected = entity;
        self.pagination.reset();
        self.form.populate_from(&self.selected);
    }

    /// Ejecutar la consulta del filtro y mostrar la primera coincidencia (o
    /// el registro vacío).
    ///
    /// Toma `&mut self` durante todo el viaje: un dashboard nunca tiene dos
    /// envíos en curso.
    pub async fn submit_filter(&mut self, source: &dyn EntitySource) {
        let result = self.form.submit(self.kind, source).await;
        self.records = result.records;
        self.select(result.selected);
    }

    /// Un clic en un día del selector llena el campo de última actualización.
    pub fn select_date(&mut self, cell: Option<NaiveDate>, time_of_day: NaiveTime) {
        if let Some(value) = self.date_picker.select(cell, time_of_day) {
            self.form.set(FilterField::LastUpdate, value);
        }
    }

    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.selected.sites.len())
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.pagination.go_to(page, self.selected.sites.len())
    }

    pub fn next_page(&mut self) -> bool {
        self.pagination.next_page(self.selected.sites.len())
    }

    pub fn previous_page(&mut self) -> bool {
        self.pagination.previous_page(self.selected.sites.len())
    }

    pub fn visible_sites(&self) -> &[SiteRecord] {
        self.pagination.window(&self.selected.sites)
    }

    pub fn entries_label(&self) -> String {
        self.pagination.entries_label(self.selected.sites.len())
    }

    pub fn stats(&self) -> Option<MonitoringStats> {
        MonitoringStats::from_sites(&self.selected.sites)
    }

    pub fn map_overlay(&self) -> MapOverlay {
        MapOverlay::for_entity(&self.selected)
    }

    pub fn is_site_map_open(&self) -> bool {
        self.site_map_open
    }

    pub fn open_site_map(&mut self) {
        self.site_map_open = true;
    }

    pub fn close_site_map(&mut self) {
        self.site_map_open = false;
    }

    /// Ruta por todos los sitios de la entidad seleccionada, en orden de visita.
    pub async fn plan_site_route(&self, assembler: &RouteAssemblyService) -> SitePlan {
        assembler.plan_sites(&self.selected.sites).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinate, SiteStatus};
    use crate::services::geocoding_service::GeocodingService;
    use crate::services::route_assembly_service::tests::ScriptedRoutingClient;
    use crate::utils::errors::AppError;
    use crate::utils::polyline;
    use crate::view_models::filter_form::tests::RecordingSource;
    use std::sync::Arc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 4, 15).unwrap()
    }

    fn vehicle_with_sites(id: &str, n: usize) -> Entity {
        Entity {
            id: id.into(),
            name: format!("Truck {}", id),
            location: "Mumbai".into(),
            current_location: "Andheri East".into(),
            status: "Moving".into(),
            last_update: "01 April 2022 23:42".into(),
            map_url: "https://maps.example/embed/truck".into(),
            sites: (0..n)
                .map(|i| SiteRecord {
                    name: if i % 2 == 0 { "Bandra Depot".into() } else { "Kurla Circle".into() },
                    status: if i == 0 { SiteStatus::Alert } else { SiteStatus::Normal },
                    time: format!("{:02}:30", 8 + i),
                })
                .collect(),
            ..Entity::empty()
        }
    }

    #[test]
    fn starts_unselected_with_default_overlay() {
        let dashboard = MonitoringDashboard::new(EntityKind::Vehicle, today());

        assert!(dashboard.selected().is_empty_sentinel());
        assert_eq!(dashboard.stats(), None);
        assert_eq!(dashboard.total_pages(), 0);
        assert!(dashboard.visible_sites().is_empty());
        assert_eq!(dashboard.entries_label(), "Showing 0 of 0 entries");

        let overlay = dashboard.map_overlay();
        assert_eq!(overlay.map_url, DEFAULT_MAP_URL);
        assert_eq!(overlay.location, DEFAULT_LOCATION);
        assert_eq!(overlay.name, "");
    }

    #[tokio::test]
    async fn submit_selects_first_match_and_resets_page() {
        let mut dashboard = MonitoringDashboard::new(EntityKind::Vehicle, today());
        dashboard.select(vehicle_with_sites("V-0", 20));
        assert!(dashboard.go_to_page(3));

        let source = RecordingSource::returning(Ok(vec![
            vehicle_with_sites("V-1", 8),
            vehicle_with_sites("V-2", 1),
        ]));
        dashboard.form.set(FilterField::Location, "Mumbai");
        dashboard.submit_filter(&source).await;

        assert_eq!(dashboard.selected().id, "V-1");
        assert_eq!(dashboard.records().len(), 2);
        assert_eq!(dashboard.page(), 1);
        assert_eq!(dashboard.total_pages(), 2);
        assert_eq!(dashboard.visible_sites().len(), 6);
        assert_eq!(dashboard.entries_label(), "Showing 1 to 6 of 8 entries");
        assert_eq!(dashboard.form.id, "V-1");

        let stats = dashboard.stats().unwrap();
        assert_eq!((stats.total_sites, stats.normal_sites, stats.alert_sites), (8, 7, 1));

        let overlay = dashboard.map_overlay();
        assert_eq!(overlay.location, "Andheri East");
        assert_eq!(overlay.map_url, "https://maps.example/embed/truck");
    }

    #[tokio::test]
    async fn submit_without_match_resets_to_empty_sentinel() {
        let mut dashboard = MonitoringDashboard::new(EntityKind::Person, today());
        dashboard.select(vehicle_with_sites("P-1", 9));
        dashboard.next_page();

        let source = RecordingSource::returning(Ok(vec![]));
        dashboard.submit_filter(&source).await;

        assert!(dashboard.selected().is_empty_sentinel());
        assert_eq!(dashboard.page(), 1);
        assert_eq!(dashboard.form, FilterForm::new());
        assert_eq!(source.queries.lock().unwrap()[0].0, EntityKind::Person);
    }

    #[tokio::test]
    async fn submit_failure_resets_to_empty_sentinel() {
        let mut dashboard = MonitoringDashboard::new(EntityKind::Vehicle, today());
        dashboard.select(vehicle_with_sites("V-1", 3));

        let source = RecordingSource::returning(Err(AppError::ExternalApi("timeout".into())));
        dashboard.submit_filter(&source).await;

        assert!(dashboard.selected().is_empty_sentinel());
        assert!(dashboard.records().is_empty());
    }

    #[test]
    fn picking_a_date_fills_last_update_and_closes_picker() {
        let mut dashboard = MonitoringDashboard::new(EntityKind::Vehicle, today());
        dashboard.date_picker.toggle();

        dashboard.select_date(None, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(dashboard.form.last_update, "");
        assert!(dashboard.date_picker.is_open());

        let day = NaiveDate::from_ymd_opt(2022, 4, 1);
        dashboard.select_date(day, NaiveTime::from_hms_opt(23, 42, 0).unwrap());
        assert_eq!(dashboard.form.last_update, "01 April 2022 23:42");
        assert!(!dashboard.date_picker.is_open());
    }

    #[tokio::test]
    async fn site_route_covers_all_sites_not_just_the_page() {
        let mut dashboard = MonitoringDashboard::new(EntityKind::Vehicle, today());
        dashboard.select(vehicle_with_sites("V-1", 8));
        dashboard.open_site_map();
        assert!(dashboard.is_site_map_open());

        let bandra = Coordinate::new(19.0602, 72.8347);
        let kurla = Coordinate::new(19.0726, 72.8822);
        let answers = (0..7)
            .map(|leg| {
                let (a, b) = if leg % 2 == 0 { (bandra, kurla) } else { (kurla, bandra) };
                Ok(polyline::encode(&[a, b]))
            })
            .collect();
        let client = Arc::new(ScriptedRoutingClient::new(answers));
        let assembler = RouteAssemblyService::new(client.clone(), GeocodingService::new());

        let plan = dashboard.plan_site_route(&assembler).await;

        assert_eq!(plan.waypoints.len(), 8);
        assert_eq!(client.calls.lock().unwrap().len(), 7);
        // 2 puntos del primer tramo, 1 nuevo por cada tramo siguiente
        assert_eq!(plan.route.len(), 8);
        assert_eq!(plan.center, bandra);

        dashboard.close_site_map();
        assert!(!dashboard.is_site_map_open());
    }
}
