//! Sistema de manejo de errores
//!
//! `AppError` es lo que devuelven los handlers; se renderiza como cuerpo
//! JSON `{ error, message, code, details? }`. Los fallos HTTP salientes son
//! `ClientError` y solo pasan a `AppError` al llegar a un handler.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Upstream service error: {0}")]
    ExternalApi(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ExternalApi(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Código estable, legible por máquina, que va en el cuerpo
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DB_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Internal(_) => "INTERNAL_ERROR",
            AppError::ExternalApi(_) => "UPSTREAM_ERROR",
        }
    }

    fn into_body(self) -> ErrorBody {
        let code = self.code();
        match self {
            // fallos de almacenamiento e internos: se loguean completos, no se devuelven
            AppError::Database(e) => {
                log::error!("❌ Falla del almacén de entidades: {}", e);
                ErrorBody {
                    error: "Database Error",
                    message: "The entity store is unavailable".to_string(),
                    code,
                    details: None,
                }
            }
            AppError::Internal(msg) => {
                log::error!("❌ Error interno: {}", msg);
                ErrorBody {
                    error: "Internal Server Error",
                    message: "An unexpected error occurred".to_string(),
                    code,
                    details: None,
                }
            }
            AppError::Validation(e) => {
                log::warn!("⚠️ Petición rechazada: {}", e);
                ErrorBody {
                    error: "Validation Error",
                    message: "The provided data is invalid".to_string(),
                    code,
                    details: Some(json!(e)),
                }
            }
            AppError::Unauthorized(msg) => {
                log::warn!("🔒 {}", msg);
                ErrorBody { error: "Unauthorized", message: msg, code, details: None }
            }
            AppError::NotFound(msg) => {
                ErrorBody { error: "Not Found", message: msg, code, details: None }
            }
            AppError::BadRequest(msg) => {
                log::warn!("⚠️ Petición inválida: {}", msg);
                ErrorBody { error: "Bad Request", message: msg, code, details: None }
            }
            AppError::ExternalApi(cause) => {
                log::error!("🌐 Falló la llamada al servicio externo: {}", cause);
                ErrorBody {
                    error: "Upstream Error",
                    message: "A dependent service did not answer correctly".to_string(),
                    code,
                    details: Some(json!({ "cause": cause })),
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self.into_body())).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Fallos de los clientes HTTP salientes (backend de consultas y ruteo)
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed response body: {0}")]
    Decode(String),

    #[error("no route returned")]
    NoRoute,
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        AppError::ExternalApi(err.to_string())
    }
}

pub fn internal_error(message: &str) -> AppError {
    AppError::Internal(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn unauthorized_keeps_its_message() {
        let (status, body) = body_of(AppError::Unauthorized("Invalid username or password".into())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid username or password");
        assert_eq!(body["code"], "UNAUTHORIZED");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn client_errors_become_bad_gateway_with_cause() {
        let (status, body) = body_of(ClientError::NoRoute.into()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["code"], "UPSTREAM_ERROR");
        assert_eq!(body["details"]["cause"], "no route returned");
    }

    #[tokio::test]
    async fn internal_details_are_not_echoed() {
        let (status, body) = body_of(internal_error("seed file /etc/secret unreadable")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.to_string().contains("/etc/secret"));
    }
}
