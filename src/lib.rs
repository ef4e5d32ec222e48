//! # airq-gateway
//!
//! REST gateway for an air-quality monitoring dashboard.
//!
//! Sensor readings and ML classifications are produced by an upstream
//! pipeline and land in a flat, keyed external store; citizen reports
//! live in the same store. This service is a coordination layer: it
//! normalizes the store's wire schema, enforces the report lifecycle,
//! and correlates reports with the monitoring station by great-circle
//! distance. No sensing or ML happens here.
//!
//! ## Architecture
//!
//! ```text
//! Dashboard clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── ReportService / SensorService / GeocodeService (service/)
//!     ├── Proximity Correlator (domain/geo)
//!     │
//!     ├── StoreClient + schema adapter (store/)
//!     │
//!     └── External key-value store, reverse geocoder (HTTP)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod store;
