//! Domain layer: report and sensor-reading models plus the proximity
//! correlator.
//!
//! Pure types and functions with no I/O. The external store's attribute
//! names never appear here; the translation lives in [`crate::store`].

pub mod geo;
pub mod reading;
pub mod report;

pub use geo::{NearbyReport, haversine_km, nearby_reports};
pub use reading::{Classification, SensorReading, StationLocation};
pub use report::{
    CitizenReport, MessageSender, NewReport, ReportMessage, ReportStatus, ReportType,
};
