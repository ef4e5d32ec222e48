//! Proximity correlator: great-circle distance between citizen reports
//! and a reference point.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::report::CitizenReport;

/// Mean Earth radius in kilometers, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A report that survived a proximity search, annotated with its
/// distance from the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NearbyReport {
    /// The underlying report.
    #[serde(flatten)]
    pub report: CitizenReport,
    /// Great-circle distance from the search origin, rounded to two
    /// decimal places.
    pub distance_km: f64,
}

/// Great-circle distance in kilometers between two points given in
/// decimal degrees, using the haversine formula.
#[must_use]
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Filters `reports` to those within `radius_km` of the origin,
/// annotating each with its distance.
///
/// Reports missing either coordinate are excluded unconditionally; they
/// are not locatable, which is not an error. Input order is preserved;
/// callers needing nearest-first must sort separately.
#[must_use]
pub fn nearby_reports(
    reports: Vec<CitizenReport>,
    origin_lat: f64,
    origin_lng: f64,
    radius_km: f64,
) -> Vec<NearbyReport> {
    reports
        .into_iter()
        .filter_map(|report| {
            let (lat, lng) = report.coordinates()?;
            let distance = haversine_km(origin_lat, origin_lng, lat, lng);
            if distance <= radius_km {
                Some(NearbyReport {
                    report,
                    distance_km: (distance * 100.0).round() / 100.0,
                })
            } else {
                None
            }
        })
        .collect()
}
