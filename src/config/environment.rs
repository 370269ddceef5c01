//! Configuración de variables de entorno
//!
//! Lee el entorno del proceso (después de que `main` cargue `.env`) en una
//! configuración tipada. Cada valor tiene un default de desarrollo.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_OSRM_BASE_URL: &str = "https://router.project-osrm.org";
pub const DEFAULT_TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_BACKEND_BASE_URL: &str = "http://localhost:5000";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub log_level: String,
    pub cors_origins: Vec<String>,
    pub database_url: Option<String>,
    pub db_pool_size: Option<u32>,
    pub seed_file: String,
    pub osrm_base_url: String,
    pub tile_url_template: String,
    pub backend_base_url: String,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
    pub http_timeout: Duration,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 5000,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            cors_origins: Vec::new(),
            database_url: None,
            db_pool_size: None,
            seed_file: "data/seed.json".to_string(),
            osrm_base_url: DEFAULT_OSRM_BASE_URL.to_string(),
            tile_url_template: DEFAULT_TILE_URL_TEMPLATE.to_string(),
            backend_base_url: DEFAULT_BACKEND_BASE_URL.to_string(),
            admin_username: None,
            admin_password: None,
            http_timeout: Duration::from_secs(10),
        }
    }
}

impl EnvironmentConfig {
    /// Construir la configuración desde las variables de entorno
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            environment: string_var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parsed_var("PORT")?.unwrap_or(defaults.port),
            host: string_var("HOST").unwrap_or(defaults.host),
            log_level: string_var("LOG_LEVEL").unwrap_or(defaults.log_level),
            cors_origins: string_var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            database_url: string_var("DATABASE_URL"),
            db_pool_size: parsed_var("DB_POOL_SIZE")?,
            seed_file: string_var("SEED_FILE").unwrap_or(defaults.seed_file),
            osrm_base_url: string_var("OSRM_BASE_URL").unwrap_or(defaults.osrm_base_url),
            tile_url_template: string_var("TILE_URL_TEMPLATE")
                .unwrap_or(defaults.tile_url_template),
            backend_base_url: string_var("BACKEND_BASE_URL").unwrap_or(defaults.backend_base_url),
            admin_username: string_var("ADMIN_USERNAME"),
            admin_password: string_var("ADMIN_PASSWORD"),
            http_timeout: parsed_var::<u64>("HTTP_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Dirección de escucha del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Credenciales de admin, solo si ambas mitades están configuradas
    pub fn admin_credentials(&self) -> Option<(&str, &str)> {
        match (&self.admin_username, &self.admin_password) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }
}

fn string_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_var<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    string_var(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("{} must be a valid number, got '{}'", key, raw))
        })
        .transpose()
}
