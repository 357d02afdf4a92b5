//! Distance primitives on a spherical earth.
//!
//! All internal computation happens in kilometers. Coordinates are
//! `geo::Coord` values with `x = longitude` and `y = latitude`, both in degrees.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::fmt;

use geo::Coord;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const EARTH_RADIUS_MILES: f64 = 3958.8;
pub const EARTH_RADIUS_NM: f64 = 3440.065;

/// Below this Mercator-stretched latitude delta the rhumb line is treated as
/// running due east-west.
const RHUMB_EPSILON: f64 = 1e-12;

/// Latitudes are pulled this close to the poles before projecting, where the
/// Mercator ordinate is infinite.
const MERCATOR_LAT_LIMIT: f64 = FRAC_PI_2 - 1e-9;

/// Distance units supported by route output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Units {
    #[serde(rename = "km", alias = "kilometers")]
    Kilometers,
    #[serde(rename = "miles")]
    Miles,
    #[default]
    #[serde(rename = "nm")]
    NauticalMiles,
}

impl Units {
    /// Parses a units selector. Unrecognized values fall back to kilometers.
    pub fn parse(value: &str) -> Self {
        match value {
            "nm" => Units::NauticalMiles,
            "miles" => Units::Miles,
            "kilometers" | "km" => Units::Kilometers,
            other => {
                log::debug!("Unknown units '{other}', falling back to kilometers");
                Units::Kilometers
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Units::Kilometers => "km",
            Units::Miles => "miles",
            Units::NauticalMiles => "nm",
        }
    }

    pub fn earth_radius(self) -> f64 {
        match self {
            Units::Kilometers => EARTH_RADIUS_KM,
            Units::Miles => EARTH_RADIUS_MILES,
            Units::NauticalMiles => EARTH_RADIUS_NM,
        }
    }

    pub fn convert_km(self, distance_km: f64) -> f64 {
        match self {
            Units::Kilometers => distance_km,
            _ => distance_km / EARTH_RADIUS_KM * self.earth_radius(),
        }
    }

    pub fn to_km(self, distance: f64) -> f64 {
        match self {
            Units::Kilometers => distance,
            _ => distance / self.earth_radius() * EARTH_RADIUS_KM,
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Converts `distance` expressed in `from` units into `to` units
pub fn convert_distance(distance: f64, from: Units, to: Units) -> f64 {
    if from == to {
        return distance;
    }
    to.convert_km(from.to_km(distance))
}

/// Haversine distance in kilometers.
///
/// The haversine term is clamped to `[0, 1]` so floating-point drift on
/// coincident or antipodal points never produces NaN.
pub fn great_circle_distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    if a == b {
        return 0.0;
    }

    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    let d_lat = (b.y - a.y).to_radians();
    let d_lon = (b.x - a.x).to_radians();

    let h = ((d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance along the line of constant bearing between `a` and `b`
pub fn rhumb_distance(a: Coord<f64>, b: Coord<f64>, units: Units) -> f64 {
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    let d_lat = lat2 - lat1;
    let mut d_lon = (b.x - a.x).abs().to_radians();

    let d_phi = mercator_y(lat2) - mercator_y(lat1);
    let q = if d_phi.abs() < RHUMB_EPSILON {
        lat1.cos()
    } else {
        d_lat / d_phi
    };

    // Take the shorter way around the antimeridian
    if d_lon > PI {
        d_lon = 2.0 * PI - d_lon;
    }

    let angular = (d_lat * d_lat + q * q * d_lon * d_lon).sqrt();
    angular * units.earth_radius()
}

fn mercator_y(lat: f64) -> f64 {
    (lat.clamp(-MERCATOR_LAT_LIMIT, MERCATOR_LAT_LIMIT) / 2.0 + FRAC_PI_4)
        .tan()
        .ln()
}

/// Great-circle distance in kilometers from `point` to the closest point of
/// the segment `start..end`.
///
/// The closest point is found by projecting in plain lon/lat space, which is
/// only accurate for short segments.
pub fn point_to_segment_distance_km(point: Coord<f64>, start: Coord<f64>, end: Coord<f64>) -> f64 {
    let delta = end - start;
    let len_sq = delta.x * delta.x + delta.y * delta.y;

    let param = if len_sq == 0.0 {
        -1.0
    } else {
        let offset = point - start;
        (offset.x * delta.x + offset.y * delta.y) / len_sq
    };

    let closest = if param <= 0.0 {
        start
    } else if param >= 1.0 {
        end
    } else {
        start + delta * param
    };

    great_circle_distance_km(point, closest)
}

/// Minimum distance from `point` to any segment of `line`.
///
/// A line with fewer than two coordinates has no segments and is infinitely far.
pub fn point_to_polyline_distance(point: Coord<f64>, line: &[Coord<f64>], units: Units) -> f64 {
    let min_km = line
        .iter()
        .tuple_windows()
        .map(|(&start, &end)| point_to_segment_distance_km(point, start, end))
        .fold(f64::INFINITY, f64::min);

    units.convert_km(min_km)
}

/// Sum of great-circle distances between consecutive coordinates
pub fn polyline_length(coords: &[Coord<f64>], units: Units) -> f64 {
    let total_km: f64 = coords
        .iter()
        .tuple_windows()
        .map(|(&a, &b)| great_circle_distance_km(a, b))
        .sum();

    units.convert_km(total_km)
}
