use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Entity;

/// Filtro de coincidencia exacta para las consultas de vehículos/personal.
///
/// Sirve a la vez como query string de `GET /api/{vehicles|personnel}` y
/// como payload del formulario de filtros. Un string vacío significa "sin filtro".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EntityFilters {
    #[validate(length(max = 128))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[validate(length(max = 128))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(length(max = 256))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[validate(length(max = 64))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[validate(length(max = 64))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
}

impl EntityFilters {
    /// Construir desde los pares crudos del query string.
    ///
    /// Gana el primer valor de cada clave (aunque esté vacío); las claves
    /// desconocidas se ignoran.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filters = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "id" => &mut filters.id,
                "name" => &mut filters.name,
                "location" => &mut filters.location,
                "status" => &mut filters.status,
                "lastUpdate" => &mut filters.last_update,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        filters
    }

    /// Quitar los valores vacíos para que no se envíen ni se comparen.
    pub fn normalized(self) -> Self {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        Self {
            id: keep(self.id),
            name: keep(self.name),
            location: keep(self.location),
            status: keep(self.status),
            last_update: keep(self.last_update),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_pairs().is_empty()
    }

    /// Pares `(nombre_wire, valor)` no vacíos, en orden fijo.
    pub fn as_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("id", &self.id),
            ("name", &self.name),
            ("location", &self.location),
            ("status", &self.status),
            ("lastUpdate", &self.last_update),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        })
        .collect()
    }

    /// Verdadero si cada campo informado es idéntico al de la entidad.
    pub fn matches(&self, entity: &Entity) -> bool {
        self.as_pairs().into_iter().all(|(key, value)| {
            let field = match key {
                "id" => &entity.id,
                "name" => &entity.name,
                "location" => &entity.location,
                "status" => &entity.status,
                _ => &entity.last_update,
            };
            field == value
        })
    }
}
