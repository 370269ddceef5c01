//! Estado compartido de la aplicación
//!
//! Se construye una vez en `main` y se pasa al router de Axum. Nada se
//! modifica después del arranque.

use std::sync::Arc;

use crate::clients::RoutingClient;
use crate::config::environment::EnvironmentConfig;
use crate::repositories::EntitySource;
use crate::services::{AuthService, GeocodingService, RouteAssemblyService};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub entities: Arc<dyn EntitySource>,
    pub route_assembler: RouteAssemblyService,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        entities: Arc<dyn EntitySource>,
        routing: Arc<dyn RoutingClient>,
    ) -> Self {
        let auth = AuthService::new(
            config
                .admin_credentials()
                .map(|(user, pass)| (user.to_string(), pass.to_string())),
        );

        Self {
            route_assembler: RouteAssemblyService::new(routing, GeocodingService::new()),
            auth,
            entities,
            config,
        }
    }
}
