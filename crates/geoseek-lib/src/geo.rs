//! Geodesic distance functions.
//!
//! Two metrics are provided:
//!
//! - [`distance`] - great-circle distance using the haversine formula. This is
//!   the authoritative metric used for edge costs and reported distances.
//! - [`distance_approx`] - a planar (equirectangular) approximation with fixed
//!   metres-per-degree constants, only meant to order a search frontier.
//!
//! Both take `(latitude, longitude)` pairs in degrees and return metres.
//! Non-finite input propagates as NaN; use [`checked_distance`] when the
//! caller wants invalid coordinates rejected instead.

use crate::error::{Error, Result};

/// Earth radius used by the haversine formula, in kilometres.
///
/// 6372.8 km rather than the 6371 km mean radius: it gives the smallest
/// average haversine error against the WGS-84 ellipsoid.
pub const EARTH_RADIUS_KM: f64 = 6372.8;

/// Metres per degree of latitude used by [`distance_approx`].
pub const LAT_METERS_PER_DEGREE: f64 = 111_229.0;

/// Metres per degree of longitude used by [`distance_approx`].
///
/// Fixed for a reference latitude band (about 50 degrees) rather than scaled
/// by `cos(latitude)`. See [`max_admissible_latitude`].
pub const LNG_METERS_PER_DEGREE: f64 = 71_695.0;

/// Great-circle distance in metres between two points given in degrees.
///
/// Identical points yield `0.0` and antipodal points yield half the
/// circumference. Any NaN or infinite input yields NaN.
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let half_lat = (d_lat / 2.0).sin();
    let half_lng = (d_lng / 2.0).sin();
    let a = half_lat * half_lat
        + lat1.to_radians().cos() * lat2.to_radians().cos() * half_lng * half_lng;

    // Rounding can push `a` just past 1.0 for antipodal points, where `asin`
    // would return NaN. `clamp` keeps NaN as NaN.
    2.0 * EARTH_RADIUS_KM * 1000.0 * a.clamp(0.0, 1.0).sqrt().asin()
}

/// Planar approximation of the distance in metres, for search heuristics only.
///
/// Latitude and longitude deltas are scaled by [`LAT_METERS_PER_DEGREE`] and
/// [`LNG_METERS_PER_DEGREE`] and combined with the Euclidean norm. The result
/// is not a reported distance.
pub fn distance_approx(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let dy = (lat2 - lat1) * LAT_METERS_PER_DEGREE;
    let dx = (lng2 - lng1) * LNG_METERS_PER_DEGREE;
    (dy * dy + dx * dx).sqrt()
}

/// Like [`distance`] but rejects non-finite or out-of-range coordinates.
pub fn checked_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Result<f64> {
    validate_coordinate(lat1, lng1)?;
    validate_coordinate(lat2, lng2)?;
    Ok(distance(lat1, lng1, lat2, lng2))
}

/// Latitude in degrees above which [`LNG_METERS_PER_DEGREE`] exceeds the true
/// metres per degree of longitude on the haversine sphere.
///
/// Poleward of this latitude [`distance_approx`] can overestimate east-west
/// distances and stops being an admissible A* heuristic. Equatorward it
/// underestimates them. The latitude constant is about 0.0025% above the
/// sphere's value, which is below the resolution of rounded node keys.
pub fn max_admissible_latitude() -> f64 {
    let meters_per_degree = EARTH_RADIUS_KM * 1000.0 * std::f64::consts::PI / 180.0;
    (LNG_METERS_PER_DEGREE / meters_per_degree).acos().to_degrees()
}

pub(crate) fn validate_coordinate(lat: f64, lng: f64) -> Result<()> {
    let valid = lat.is_finite()
        && lng.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lng);
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidCoordinate { lat, lng })
    }
}
