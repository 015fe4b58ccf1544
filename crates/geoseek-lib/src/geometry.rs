//! Reductions from a found path to a polyline and a total length.

use crate::error::Result;
use crate::geo::{distance, validate_coordinate};
use crate::node::Node;

/// A geometry point in `[longitude, latitude]` order (GeoJSON convention).
pub type LngLat = [f64; 2];

/// Total great-circle length of a polyline, rounded to whole metres.
///
/// Rounding happens once on the sum, not per segment. Fewer than two points
/// yield `0`. Non-finite or out-of-range points are rejected.
pub fn geometry_distance(points: &[LngLat]) -> Result<u64> {
    for point in points {
        validate_coordinate(point[1], point[0])?;
    }

    Ok(polyline_length(points).round() as u64)
}

/// Unrounded great-circle length of a polyline, in metres.
pub(crate) fn polyline_length(points: &[LngLat]) -> f64 {
    points
        .windows(2)
        .map(|pair| distance(pair[0][1], pair[0][0], pair[1][1], pair[1][0]))
        .sum()
}

/// Concatenate the `segment` of every node on `path`, in order.
///
/// Nodes without a segment contribute nothing. Points are neither
/// deduplicated nor reordered.
pub fn path_segments_geometry<'a, I>(path: I) -> Vec<LngLat>
where
    I: IntoIterator<Item = &'a Node>,
{
    let mut points = Vec::new();
    for node in path {
        if let Some(segment) = &node.segment {
            points.extend_from_slice(segment);
        }
    }
    points
}
