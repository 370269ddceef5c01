//! Configuración del pool para el almacén Postgres opcional
//!
//! El almacén es casi solo lectura (se siembra una vez y luego se filtra):
//! pool pequeño, conexiones recicladas en vez de mantenidas para siempre.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

const DEFAULT_POOL_SIZE: u32 = 5;

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            pool_size: DEFAULT_POOL_SIZE,
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(600),
        }
    }

    /// Cambiar el tamaño del pool; cero se sube a uno.
    pub fn with_pool_size(mut self, size: u32) -> Self {
        self.pool_size = size.max(1);
        self
    }

    pub async fn create_pool(&self) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(self.pool_size)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(Some(self.idle_timeout))
            .connect(&self.url)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_size_is_at_least_one() {
        let config = DatabaseConfig::new("postgresql://localhost/fleet").with_pool_size(0);
        assert_eq!(config.pool_size, 1);
        assert_eq!(DatabaseConfig::new("x").pool_size, DEFAULT_POOL_SIZE);
    }
}
