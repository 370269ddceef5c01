use serde::{Deserialize, Serialize};
use validator::Validate;

/// Cuerpo de `POST /api/login`
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Respuesta cuando se acepta el login del dashboard
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub username: String,
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn success(username: String) -> Self {
        Self {
            success: true,
            username,
            message: Some("Login successful".to_string()),
        }
    }
}
