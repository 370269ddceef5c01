//! Almacenamiento de entidades
//!
//! Los registros se buscan por coincidencia exacta en los campos filtrables
//! y vuelven en orden de inserción. Dos almacenes implementan
//! [`EntitySource`]: Postgres (un payload JSONB por registro) y uno en
//! memoria cargado del archivo semilla cuando no hay base configurada.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use sqlx::{types::Json, PgPool, Postgres, QueryBuilder};

use crate::dto::EntityFilters;
use crate::models::{Entity, EntityKind};
use crate::utils::errors::{internal_error, AppResult};

/// Cualquier cosa que responda una consulta filtrada de vehículos/personal
#[async_trait]
pub trait EntitySource: Send + Sync {
    async fn find(&self, kind: EntityKind, filters: &EntityFilters) -> AppResult<Vec<Entity>>;
}

/// Estructura del archivo semilla
#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub vehicles: Vec<Entity>,
    #[serde(default)]
    pub personnel: Vec<Entity>,
}

impl SeedData {
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| internal_error(&format!("cannot read {}: {}", path.display(), e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| internal_error(&format!("invalid seed file {}: {}", path.display(), e)))
    }

    fn into_collections(self) -> [(EntityKind, Vec<Entity>); 2] {
        [
            (EntityKind::Vehicle, self.vehicles),
            (EntityKind::Person, self.personnel),
        ]
    }
}

#[derive(Debug, Default)]
pub struct InMemoryEntityRepository {
    records: HashMap<EntityKind, Vec<Entity>>,
}

impl InMemoryEntityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let mut repository = Self::new();
        for (kind, entities) in seed.into_collections() {
            repository.records.insert(kind, entities);
        }
        repository
    }

    pub fn insert(&mut self, kind: EntityKind, entity: Entity) {
        self.records.entry(kind).or_default().push(entity);
    }

    pub fn len(&self, kind: EntityKind) -> usize {
        self.records.get(&kind).map_or(0, Vec::len)
    }
}

#[async_trait]
impl EntitySource for InMemoryEntityRepository {
    async fn find(&self, kind: EntityKind, filters: &EntityFilters) -> AppResult<Vec<Entity>> {
        let matches = self
            .records
            .get(&kind)
            .map(|records| {
                records
                    .iter()
                    .filter(|entity| filters.matches(entity))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(matches)
    }
}

pub struct PgEntityRepository {
    pool: PgPool,
}

impl PgEntityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, kind: EntityKind, entity: &Entity) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO monitored_entities (kind, id, name, location, status, last_update, payload)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(kind.collection())
        .bind(&entity.id)
        .bind(&entity.name)
        .bind(&entity.location)
        .bind(&entity.status)
        .bind(&entity.last_update)
        .bind(Json(entity))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Importar los registros semilla si la tabla sigue vacía.
    pub async fn seed_if_empty(&self, seed: SeedData) -> AppResult<usize> {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM monitored_entities")
            .fetch_one(&self.pool)
            .await?;
        if existing > 0 {
            log::info!("🗄️ La tabla ya tiene {} registros, se omite la semilla", existing);
            return Ok(0);
        }

        let mut imported = 0;
        for (kind, entities) in seed.into_collections() {
            for entity in &entities {
                self.insert(kind, entity).await?;
                imported += 1;
            }
        }
        log::info!("🌱 {} registros sembrados", imported);
        Ok(imported)
    }
}

fn filter_column(wire_name: &str) -> &'static str {
    match wire_name {
        "id" => "id",
        "name" => "name",
        "location" => "location",
        "status" => "status",
        _ => "last_update",
    }
}

#[async_trait]
impl EntitySource for PgEntityRepository {
    async fn find(&self, kind: EntityKind, filters: &EntityFilters) -> AppResult<Vec<Entity>> {
        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT payload FROM monitored_entities WHERE kind = ");
        query.push_bind(kind.collection());

        for (key, value) in filters.as_pairs() {
            query
                .push(" AND ")
                .push(filter_column(key))
                .push(" = ")
                .push_bind(value.to_string());
        }
        query.push(" ORDER BY seq");

        let rows: Vec<(Json<Entity>,)> = query.build_query_as().fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(|(Json(entity),)| entity).collect())
    }
}
