//! Verificación del login del dashboard
//!
//! Es un stub: con credenciales de admin configuradas deben coincidir
//! exactamente; si no, entra cualquier par usuario/contraseña no vacío.

use crate::dto::LoginRequest;
use crate::utils::errors::{AppError, AppResult};

pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Debug, Clone, Default)]
pub struct AuthService {
    credentials: Option<(String, String)>,
}

impl AuthService {
    pub fn new(credentials: Option<(String, String)>) -> Self {
        Self { credentials }
    }

    pub fn open() -> Self {
        Self::default()
    }

    pub fn check(&self, username: &str, password: &str) -> bool {
        if username.is_empty() || password.is_empty() {
            return false;
        }
        match &self.credentials {
            Some((user, pass)) => user == username && pass == password,
            None => true,
        }
    }

    /// Acepta o rechaza un intento de login; el rechazo lleva el mensaje
    /// que se muestra bajo el formulario.
    pub fn authenticate(&self, request: &LoginRequest) -> AppResult<()> {
        if self.check(&request.username, &request.password) {
            log::info!("🔓 Login aceptado para '{}'", request.username);
            Ok(())
        } else {
            log::warn!("🔒 Login rechazado para '{}'", request.username);
            Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn configured_credentials_must_match() {
        let auth = AuthService::new(Some(("admin".into(), "s3cret".into())));
        assert!(auth.authenticate(&request("admin", "s3cret")).is_ok());
        assert!(!auth.check("admin", "wrong"));
        assert!(!auth.check("Admin", "s3cret"));

        match auth.authenticate(&request("admin", "nope")) {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, INVALID_CREDENTIALS),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn open_mode_accepts_any_non_empty_pair() {
        let auth = AuthService::open();
        assert!(auth.check("anyone", "anything"));
        assert!(!auth.check("", "anything"));
        assert!(!auth.check("anyone", ""));
    }
}
