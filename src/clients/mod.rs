//! Clients - HTTP Clients for External APIs
//!
//! El servicio de ruteo (OSRM) y el backend de consultas de monitoreo.

pub mod backend_client;
pub mod osrm_client;

pub use backend_client::BackendClient;
pub use osrm_client::{OsrmClient, RoutingClient};
