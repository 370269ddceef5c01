//! Módulo de servicios
//!
//! Lógica de negocio: geocodificación de sitios, armado de rutas de varios
//! tramos y verificación del login.

pub mod auth_service;
pub mod geocoding_service;
pub mod route_assembly_service;

pub use auth_service::AuthService;
pub use geocoding_service::GeocodingService;
pub use route_assembly_service::{RouteAssemblyService, SitePlan};
