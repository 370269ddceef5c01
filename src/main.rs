use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use fleet_monitor::clients::OsrmClient;
use fleet_monitor::config::{DatabaseConfig, EnvironmentConfig};
use fleet_monitor::database;
use fleet_monitor::repositories::{EntitySource, InMemoryEntityRepository, PgEntityRepository, SeedData};
use fleet_monitor::routes::create_app;
use fleet_monitor::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar .env si existe
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    let level = tracing::Level::from_str(&config.log_level).unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    info!("🚚 Fleet Monitor - API de consultas de vehículos y personal");
    info!("================================================");
    if config.is_development() {
        info!("🧪 Modo desarrollo");
    }

    let entities = build_entity_store(&config).await?;

    let routing = OsrmClient::new(config.osrm_base_url.clone(), config.http_timeout)
        .context("building routing client")?;
    info!("🛣️ Servicio de ruteo: {}", config.osrm_base_url);
    if config.admin_credentials().is_none() {
        warn!("⚠️ ADMIN_USERNAME/ADMIN_PASSWORD sin definir, el login acepta cualquier credencial");
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app(AppState::new(config, entities, Arc::new(routing)));

    info!("🌐 Servidor escuchando en http://{}", addr);
    info!("🔍 Endpoints:");
    info!("   GET  /health");
    info!("   GET  /api/vehicles?id=&name=&location=&status=&lastUpdate=");
    info!("   GET  /api/personnel?id=&name=&location=&status=&lastUpdate=");
    info!("   POST /api/route");
    info!("   POST /api/login");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor detenido");
    Ok(())
}

/// Postgres si DATABASE_URL está definida (sembrada en el primer arranque);
/// si no, el archivo semilla en memoria.
async fn build_entity_store(config: &EnvironmentConfig) -> Result<Arc<dyn EntitySource>> {
    match &config.database_url {
        Some(url) => {
            let mut db_config = DatabaseConfig::new(url.clone());
            if let Some(size) = config.db_pool_size {
                db_config = db_config.with_pool_size(size);
            }
            let pool = database::connect(&db_config)
                .await
                .context("connecting to the database")?;
            let repository = PgEntityRepository::new(pool);
            match SeedData::load(&config.seed_file) {
                Ok(seed) => {
                    repository.seed_if_empty(seed).await?;
                }
                Err(e) => warn!("⚠️ No se importó semilla: {}", e),
            }
            Ok(Arc::new(repository))
        }
        None => {
            let seed = SeedData::load(&config.seed_file)?;
            let repository = InMemoryEntityRepository::from_seed(seed);
            info!(
                "📦 Almacén en memoria: {} vehículos, {} personas",
                repository.len(fleet_monitor::models::EntityKind::Vehicle),
                repository.len(fleet_monitor::models::EntityKind::Person)
            );
            Ok(Arc::new(repository))
        }
    }
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C recibido, apagando...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando...");
        },
    }
}
