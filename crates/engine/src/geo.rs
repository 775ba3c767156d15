//! Great-circle distance and the distance stage of the pipeline.
//!
//! Distances are in kilometres on a sphere of radius 6371 km.

use catalog::{GeoPoint, RestaurantRecord};
use rayon::prelude::*;

/// Mean Earth radius in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometres.
///
/// The haversine term is clamped to `[0, 1]` before `sqrt`/`asin`: rounding
/// can push it just past 1 near antipodal points, which would give NaN.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.clamp(0.0, 1.0).sqrt().asin()
}

/// A catalog record paired with its distance from the user.
///
/// The distance lives only here; it is never written to the catalog.
#[derive(Debug, Clone, Copy)]
pub struct ScoredRecord<'a> {
    pub record: &'a RestaurantRecord,
    pub distance_km: f64,
}

/// Attach the distance from `origin` to every candidate.
///
/// Runs in parallel; output order matches input order.
pub fn annotate_distances<'a>(
    candidates: Vec<&'a RestaurantRecord>,
    origin: GeoPoint,
) -> Vec<ScoredRecord<'a>> {
    candidates
        .into_par_iter()
        .map(|record| ScoredRecord {
            record,
            distance_km: haversine_km(origin, record.location()),
        })
        .collect()
}

/// Keep candidates with `distance_km <= max_distance_km` (inclusive)
pub fn within_distance(
    mut scored: Vec<ScoredRecord<'_>>,
    max_distance_km: f64,
) -> Vec<ScoredRecord<'_>> {
    scored.retain(|candidate| candidate.distance_km <= max_distance_km);
    scored
}
