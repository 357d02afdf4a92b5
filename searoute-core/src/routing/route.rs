use geo::{Coord, LineString};
use geojson::{Feature, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::dijkstra::PathResult;
use crate::Error;
use crate::geo_math::{Units, polyline_length};

/// A computed sea route, measured in the requested units
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub geometry: LineString<f64>,
    /// Route length in `units`
    pub length: f64,
    pub units: Units,
}

impl Route {
    pub fn from_path(path: PathResult, units: Units) -> Self {
        let length = polyline_length(&path.path, units);
        Self {
            geometry: path.into_line_string(),
            length,
            units,
        }
    }

    pub fn coordinates(&self) -> &[Coord<f64>] {
        &self.geometry.0
    }

    /// Converts the route to a `GeoJSON` `LineString` Feature with `units`
    /// and `length` properties.
    pub fn to_feature(&self) -> Result<Feature, Error> {
        let geometry = Geometry::new(GeoJsonValue::from(&self.geometry));

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "units": self.units.label(),
                "length": self.length,
            }
        });

        Feature::from_json_value(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_feature()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_math::great_circle_distance_km;
    use geo::coord;

    #[test]
    fn feature_carries_units_and_length() {
        let path = PathResult {
            path: vec![coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 0.0 }],
            distance_km: great_circle_distance_km(coord! { x: 0.0, y: 0.0 }, coord! { x: 1.0, y: 0.0 }),
        };
        let route = Route::from_path(path, Units::NauticalMiles);

        let feature = route.to_feature().unwrap();
        let properties = feature.properties.as_ref().unwrap();
        assert_eq!(properties["units"], "nm");
        assert_eq!(properties["length"].as_f64(), Some(route.length));

        let value: serde_json::Value =
            serde_json::from_str(&route.to_geojson_string().unwrap()).unwrap();
        assert_eq!(value["type"], "Feature");
        assert_eq!(value["geometry"]["type"], "LineString");
        assert_eq!(value["geometry"]["coordinates"][1][0], 1.0);
    }

    #[test]
    fn length_is_converted() {
        let path = PathResult {
            path: vec![coord! { x: 0.0, y: 0.0 }, coord! { x: 0.0, y: 1.0 }],
            distance_km: 0.0,
        };
        let km = Route::from_path(path.clone(), Units::Kilometers).length;
        let miles = Route::from_path(path, Units::Miles).length;
        assert!((miles - km / 6371.0 * 3958.8).abs() < 1e-9);
    }
}
