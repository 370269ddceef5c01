//! View-models de los paneles de monitoreo
//!
//! Structs de estado con métodos explícitos de recálculo. Nada aquí
//! renderiza; una capa de UI lee las vistas derivadas tras cada transición.

pub mod dashboard;
pub mod date_picker;
pub mod filter_form;
pub mod site_pagination;

pub use dashboard::{MapOverlay, MonitoringDashboard};
pub use date_picker::{DatePicker, DayCell};
pub use filter_form::{FilterField, FilterForm, FilterResult};
pub use site_pagination::{MonitoringStats, SitePagination, SITES_PER_PAGE};
