//! Payloads de petición/respuesta de la API HTTP

pub mod auth_dto;
pub mod entity_dto;
pub mod route_dto;

pub use auth_dto::{LoginRequest, LoginResponse};
pub use entity_dto::EntityFilters;
pub use route_dto::{PlanRouteRequest, RoutePlanResponse};
