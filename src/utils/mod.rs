//! Utilidades compartidas
//!
//! Tipos de error, extractores de Axum y el codec de polylines.

pub mod errors;
pub mod extractors;
pub mod polyline;
