//! Modelos de datos
//!
//! Registros de entidades del backend de consultas y los tipos geográficos
//! del armado de rutas.

pub mod entity;
pub mod geo;

pub use entity::{Entity, EntityKind, SiteRecord, SiteStatus};
pub use geo::{AssembledRoute, Coordinate, RouteSegment, Waypoint};
