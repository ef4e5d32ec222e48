//! Service layer: orchestration between the HTTP surface and the
//! external store.
//!
//! [`ReportService`] owns the citizen-report CRUD semantics,
//! [`SensorService`] the read-only sensor paths, and [`GeocodeService`]
//! the reverse-geocoding proxy.

pub mod geocode_service;
pub mod report_service;
pub mod sensor_service;

pub use geocode_service::GeocodeService;
pub use report_service::ReportService;
pub use sensor_service::SensorService;
