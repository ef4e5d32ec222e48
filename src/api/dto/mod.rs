//! Data Transfer Objects for REST request/response serialization.
//!
//! DTOs are converted into domain types at the handler boundary; domain
//! and service code never sees raw request shapes.

pub mod geo_dto;
pub mod report_dto;
pub mod sensor_dto;

pub use geo_dto::*;
pub use report_dto::*;
pub use sensor_dto::*;
