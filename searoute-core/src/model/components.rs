//! Network graph components - vertex keys, vertices and edges

use geo::Coord;

/// Six decimal places, ~0.11 m
const VERTEX_KEY_SCALE: f64 = 1_000_000.0;

/// Largest scaled magnitude that still maps to a distinct integer key
const MAX_SCALED_COORD: f64 = 9_007_199_254_740_992.0;

/// Canonical identity of a graph vertex: longitude and latitude multiplied
/// by 10^6 and rounded.
///
/// Two coordinates share a vertex iff their keys are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey(pub i64, pub i64);

impl VertexKey {
    /// Key of `coord`, or `None` if either ordinate is not finite or too
    /// large to round to a unique integer.
    pub fn from_coord(coord: Coord<f64>) -> Option<Self> {
        Some(Self(scale(coord.x)?, scale(coord.y)?))
    }
}

#[allow(clippy::cast_possible_truncation)]
fn scale(value: f64) -> Option<i64> {
    let scaled = (value * VERTEX_KEY_SCALE).round();
    (scaled.is_finite() && scaled.abs() < MAX_SCALED_COORD).then_some(scaled as i64)
}

/// Sea network graph node
#[derive(Debug, Clone, PartialEq)]
pub struct SeaVertex {
    pub key: VertexKey,
    /// Original (unrounded) coordinate of the first occurrence
    pub coordinate: Coord<f64>,
}

/// Sea network graph edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeaEdge {
    /// Great-circle length in kilometers
    pub weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    #[test]
    fn rounds_to_six_decimals() {
        assert_eq!(
            VertexKey::from_coord(coord! { x: 12.345_678_9, y: -0.000_000_4 }),
            Some(VertexKey(12_345_679, 0))
        );
    }

    #[test]
    fn non_finite_coordinates_have_no_key() {
        assert_eq!(VertexKey::from_coord(coord! { x: f64::NAN, y: 0.0 }), None);
        assert_eq!(VertexKey::from_coord(coord! { x: 0.0, y: f64::INFINITY }), None);
        assert_eq!(VertexKey::from_coord(coord! { x: f64::NEG_INFINITY, y: f64::NAN }), None);
    }

    #[test]
    fn huge_coordinates_do_not_saturate() {
        assert_eq!(VertexKey::from_coord(coord! { x: 1e300, y: 0.0 }), None);
        assert_eq!(VertexKey::from_coord(coord! { x: 0.0, y: -1e13 }), None);
    }
}
