//! Snapping of arbitrary query points onto network vertices

use geo::{Coord, LineString};

use crate::geo_math::{Units, point_to_polyline_distance, rhumb_distance};
use crate::model::SeaNetwork;

/// Admission threshold for the nearest polyline. Larger than any distance on
/// earth, so in practice every polyline is admitted.
pub const SNAP_THRESHOLD_KM: f64 = 30_000.0;

/// Snaps `point` using the network's configured threshold
pub fn snap_to_network(network: &SeaNetwork, point: Coord<f64>) -> Coord<f64> {
    snap_with_threshold(network, point, network.meta.snap_threshold_km)
}

/// Finds the polyline closest to `point` and returns that polyline's vertex
/// with the shortest rhumb distance to `point`.
///
/// Ties go to the polyline (and vertex) that comes first in network order.
/// If no polyline is closer than `max_distance_km` the point is returned
/// unchanged.
pub fn snap_with_threshold(network: &SeaNetwork, point: Coord<f64>, max_distance_km: f64) -> Coord<f64> {
    nearest_polyline(network.polylines(), point, max_distance_km)
        .and_then(|line| nearest_vertex(line, point))
        .unwrap_or_else(|| {
            log::debug!("No network polyline within {max_distance_km} km of {point:?}");
            point
        })
}

fn nearest_polyline(
    polylines: &[LineString<f64>],
    point: Coord<f64>,
    max_distance_km: f64,
) -> Option<&LineString<f64>> {
    let mut nearest = None;
    let mut min_distance = max_distance_km;

    for line in polylines {
        let distance = point_to_polyline_distance(point, &line.0, Units::Kilometers);
        if distance < min_distance {
            min_distance = distance;
            nearest = Some(line);
        }
    }

    nearest
}

fn nearest_vertex(line: &LineString<f64>, point: Coord<f64>) -> Option<Coord<f64>> {
    line.0
        .iter()
        .map(|&vertex| (vertex, rhumb_distance(point, vertex, Units::Kilometers)))
        .fold(None, |best: Option<(Coord<f64>, f64)>, candidate| match best {
            Some(best) if best.1 <= candidate.1 => Some(best),
            _ => Some(candidate),
        })
        .map(|(vertex, _)| vertex)
}
