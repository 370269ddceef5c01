use std::sync::Arc;

use validator::Validate;

use crate::dto::EntityFilters;
use crate::models::{Entity, EntityKind};
use crate::repositories::EntitySource;
use crate::utils::errors::AppResult;

pub struct EntityController {
    source: Arc<dyn EntitySource>,
}

impl EntityController {
    pub fn new(source: Arc<dyn EntitySource>) -> Self {
        Self { source }
    }

    /// Registros de `kind` que coinciden exactamente con cada filtro informado.
    pub async fn query(&self, kind: EntityKind, filters: EntityFilters) -> AppResult<Vec<Entity>> {
        filters.validate()?;
        let filters = filters.normalized();

        let records = self.source.find(kind, &filters).await?;
        log::info!(
            "📋 Consulta {} {:?} -> {} registro(s)",
            kind,
            filters.as_pairs(),
            records.len()
        );
        Ok(records)
    }
}
