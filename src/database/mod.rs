//! Módulo de base de datos
//!
//! Conexión PostgreSQL y gestión del esquema

pub mod connection;

pub use connection::connect;
