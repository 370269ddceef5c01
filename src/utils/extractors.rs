//! Extractores de Axum con errores JSON
//!
//! Los rechazos de `Query`/`Json` de Axum responden texto plano; estos
//! envoltorios los convierten en `AppError::BadRequest` para que todas las
//! respuestas de error tengan el mismo cuerpo.

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::dto::EntityFilters;
use crate::utils::errors::AppError;

/// Filtros leídos del query string, con el primer valor de cada clave
pub struct FilterQuery(pub EntityFilters);

#[async_trait]
impl<S> FromRequestParts<S> for FilterQuery
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(FilterQuery(EntityFilters::from_pairs(pairs)))
    }
}

/// Cuerpo JSON cuyo rechazo sale como `AppError`
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(ApiJson(value))
    }
}
