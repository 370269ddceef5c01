//! Conexión PostgreSQL
//!
//! Abre el pool del almacén de entidades y asegura que exista su tabla.

use sqlx::PgPool;

use crate::config::DatabaseConfig;

const CREATE_ENTITIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS monitored_entities (
    seq          BIGSERIAL PRIMARY KEY,
    kind         TEXT NOT NULL,
    id           TEXT NOT NULL,
    name         TEXT NOT NULL,
    location     TEXT NOT NULL,
    status       TEXT NOT NULL,
    last_update  TEXT NOT NULL,
    payload      JSONB NOT NULL
)
"#;

const CREATE_KIND_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS monitored_entities_kind_idx ON monitored_entities (kind, seq)";

/// Conectar con la configuración dada y preparar el esquema
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    log::info!("🗄️ Conectando a {}", mask_database_url(&config.url));
    let pool = config.create_pool().await?;
    run_migrations(&pool).await?;
    log::info!("✅ Base de datos lista");
    Ok(pool)
}

/// Crear la tabla de entidades y su índice si faltan
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_ENTITIES_TABLE).execute(pool).await?;
    sqlx::query(CREATE_KIND_INDEX).execute(pool).await?;
    Ok(())
}

/// Ocultar credenciales al loguear una URL de base de datos
fn mask_database_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at_pos)) if at_pos > scheme_end => {
            format!("{}***:***@{}", &url[..scheme_end + 3], &url[at_pos + 1..])
        }
        _ => url.to_string(),
    }
}
