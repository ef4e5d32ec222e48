//! REST endpoint handlers organized by resource.

pub mod geocode;
pub mod nearby;
pub mod reports;
pub mod sensors;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api/v1`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(reports::routes())
        .merge(sensors::routes())
        .merge(nearby::routes())
        .merge(geocode::routes())
}
