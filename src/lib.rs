//! Fleet monitor
//!
//! Backend de consultas y view-models de los paneles del dashboard de
//! monitoreo de vehículos/personal: consultas por coincidencia exacta,
//! armado de rutas sobre un servicio compatible con OSRM, paginación de
//! sitios, formulario de filtros y selector de fecha.

pub mod clients;
pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
pub mod view_models;
