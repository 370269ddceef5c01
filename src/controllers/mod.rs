pub mod entity_controller;
pub mod route_controller;

pub use entity_controller::EntityController;
pub use route_controller::RouteController;
