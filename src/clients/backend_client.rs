//! Cliente HTTP del backend de consultas
//!
//! Lo usan los view-models del dashboard cuando trabajan contra un backend
//! remoto en lugar de un almacén en proceso.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::EnvironmentConfig;
use crate::dto::EntityFilters;
use crate::models::{Entity, EntityKind};
use crate::repositories::EntitySource;
use crate::utils::errors::{AppResult, ClientError};

pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Cliente para `BACKEND_BASE_URL` con el timeout configurado.
    pub fn from_config(config: &EnvironmentConfig) -> Result<Self, ClientError> {
        Self::new(config.backend_base_url.clone(), config.http_timeout)
    }

    pub fn collection_url(&self, kind: EntityKind) -> String {
        format!("{}/api/{}", self.base_url, kind.collection())
    }

    /// Un GET con solo los campos de filtro no vacíos.
    pub async fn query(&self, kind: EntityKind, filters: &EntityFilters) -> Result<Vec<Entity>, ClientError> {
        let url = self.collection_url(kind);
        let params = filters.as_pairs();
        log::info!("🔎 Consultando {} con {} filtro(s)", url, params.len());

        let response = self.client.get(&url).query(&params).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl EntitySource for BackendClient {
    async fn find(&self, kind: EntityKind, filters: &EntityFilters) -> AppResult<Vec<Entity>> {
        Ok(self.query(kind, filters).await?)
    }
}
