//! Acceso a datos de las entidades monitoreadas

pub mod entity_repository;

pub use entity_repository::{EntitySource, InMemoryEntityRepository, PgEntityRepository, SeedData};
