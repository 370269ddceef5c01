//! Entidades monitoreadas (vehículos y personal)
//!
//! Los registros se parsean del JSON del backend en este borde. Los nombres
//! de campo siguen el formato wire (camelCase); un campo ausente o `null`
//! queda vacío, así ningún registro llega a medio construir a los view-models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Colección a la que pertenece un registro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Vehicle,
    Person,
}

impl EntityKind {
    /// Segmento de ruta bajo `/api` que sirve esta colección
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Vehicle => "vehicles",
            EntityKind::Person => "personnel",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vehicles" | "vehicle" => Ok(EntityKind::Vehicle),
            "personnel" | "person" => Ok(EntityKind::Person),
            other => Err(format!("unknown entity kind '{}'", other)),
        }
    }
}

/// `null` se trata igual que un campo ausente
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Estado de una visita. Los valores no reconocidos se guardan tal cual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteStatus {
    Normal,
    Alert,
    Other(String),
}

impl From<String> for SiteStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Normal" => SiteStatus::Normal,
            "Alert" => SiteStatus::Alert,
            _ => SiteStatus::Other(value),
        }
    }
}

impl From<SiteStatus> for String {
    fn from(status: SiteStatus) -> Self {
        match status {
            SiteStatus::Normal => "Normal".to_string(),
            SiteStatus::Alert => "Alert".to_string(),
            SiteStatus::Other(value) => value,
        }
    }
}

impl Default for SiteStatus {
    fn default() -> Self {
        SiteStatus::Other(String::new())
    }
}

/// Un sitio visitado en el itinerario de una entidad
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: SiteStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub time: String,
}

/// Vehículo o persona tal como lo sirve el backend de consultas
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Entity {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub current_location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_update: String,
    #[serde(deserialize_with = "null_as_default")]
    pub avatar: String,
    #[serde(deserialize_with = "null_as_default")]
    pub map_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sites: Vec<SiteRecord>,
}

impl Entity {
    /// Registro vacío: nada seleccionado o la consulta no encontró nada.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty_sentinel(&self) -> bool {
        *self == Self::empty()
    }

    /// Sin id ni nombre el dashboard lo trata como "nada seleccionado".
    pub fn is_unselected(&self) -> bool {
        self.id.is_empty() && self.name.is_empty()
    }
}
