use geo::Geometry;
use geojson::GeoJson;

use crate::Error;

/// Parses a `GeoJSON` `FeatureCollection` into geometries, keeping dataset order.
///
/// Features without geometry or with geometry that cannot be converted are
/// skipped.
pub fn parse_network_geometries(json: &str) -> Result<Vec<Geometry<f64>>, Error> {
    let geojson: GeoJson = json
        .parse()
        .map_err(|e: geojson::Error| Error::GeoJsonError(e.to_string()))?;

    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(Error::InvalidData(
            "Sea network must be a GeoJSON FeatureCollection".to_string(),
        ));
    };

    let total = collection.features.len();
    let geometries: Vec<Geometry<f64>> = collection
        .features
        .into_iter()
        .filter_map(|feature| {
            let geometry = feature.geometry?;
            Geometry::<f64>::try_from(geometry)
                .inspect_err(|e| log::warn!("Skipping network feature with invalid geometry: {e}"))
                .ok()
        })
        .collect();

    if geometries.len() < total {
        log::debug!(
            "{} of {total} network features had no usable geometry",
            total - geometries.len()
        );
    }

    Ok(geometries)
}
