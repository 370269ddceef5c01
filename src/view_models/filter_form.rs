//! Estado del formulario de filtros
//!
//! Cinco campos de texto libre. Enviar hace una consulta con los campos no
//! vacíos y toma la primera coincidencia, o el registro vacío si no hay
//! coincidencias o la petición falla. Los fallos se loguean, no se muestran.

use crate::dto::EntityFilters;
use crate::models::{Entity, EntityKind};
use crate::repositories::EntitySource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Id,
    Name,
    Location,
    Status,
    LastUpdate,
}

impl FilterField {
    /// Mapear el atributo `name` de un input a un campo.
    pub fn from_input_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(FilterField::Id),
            "name" => Some(FilterField::Name),
            "location" => Some(FilterField::Location),
            "status" => Some(FilterField::Status),
            "lastUpdate" => Some(FilterField::LastUpdate),
            _ => None,
        }
    }
}

/// Resultado de un envío
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult {
    pub records: Vec<Entity>,
    pub selected: Entity,
}

impl FilterResult {
    fn empty() -> Self {
        Self {
            records: Vec::new(),
            selected: Entity::empty(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub id: String,
    pub name: String,
    pub location: String,
    pub status: String,
    pub last_update: String,
}

impl FilterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Id => self.id = value,
            FilterField::Name => self.name = value,
            FilterField::Location => self.location = value,
            FilterField::Status => self.status = value,
            FilterField::LastUpdate => self.last_update = value,
        }
    }

    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Id => &self.id,
            FilterField::Name => &self.name,
            FilterField::Location => &self.location,
            FilterField::Status => &self.status,
            FilterField::LastUpdate => &self.last_update,
        }
    }

    /// Consulta con solo los campos no vacíos.
    pub fn to_filters(&self) -> EntityFilters {
        EntityFilters {
            id: Some(self.id.clone()),
            name: Some(self.name.clone()),
            location: Some(self.location.clone()),
            status: Some(self.status.clone()),
            last_update: Some(self.last_update.clone()),
        }
        .normalized()
    }

    /// Copiar la entidad mostrada de vuelta a los inputs.
    pub fn populate_from(&mut self, entity: &Entity) {
        self.id = entity.id.clone();
        self.name = entity.name.clone();
        self.location = entity.location.clone();
        self.status = entity.status.clone();
        self.last_update = entity.last_update.clone();
    }

    /// Hacer la consulta una sola vez. Sin reintentos ni debounce.
    pub async fn submit(&self, kind: EntityKind, source: &dyn EntitySource) -> FilterResult {
        let filters = self.to_filters();
        match source.find(kind, &filters).await {
            Ok(records) => {
                let selected = records.first().cloned().unwrap_or_else(Entity::empty);
                if selected.is_empty_sentinel() {
                    log::info!("📭 Ningún registro de {} coincide con {:?}", kind, filters.as_pairs());
                }
                FilterResult { records, selected }
            }
            Err(e) => {
                log::warn!("⚠️ Falló la consulta de {}, se limpia la selección: {}", kind, e);
                FilterResult::empty()
            }
        }
    }
}
