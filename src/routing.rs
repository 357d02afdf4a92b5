use geo::Coord;
use pyo3::prelude::*;
use pyo3_stub_gen::derive::gen_stub_pyfunction;

use crate::model::PySeaNetwork;
use searoute_core::prelude::*;

pub(crate) fn to_py_err(error: Error) -> PyErr {
    match error {
        Error::InvalidCoordinate { .. } | Error::InvalidData(_) => {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(error.to_string())
        }
        Error::IoError(_) | Error::GeoJsonError(_) => PyErr::new::<
            pyo3::exceptions::PyRuntimeError,
            _,
        >(format!("Route calculation failed: {error}")),
    }
}

/// Convert an optional route to a GeoJSON Feature string or None
fn optional_route_to_geojson(route: Option<&Route>) -> PyResult<Option<String>> {
    route
        .map(|route| route.to_geojson_string().map_err(to_py_err))
        .transpose()
}

/// Calculate the shortest sea route between two points
///
/// Both points are snapped onto the nearest network vertex before routing.
///
/// Parameters
/// ----------
/// network : SeaNetwork
/// origin_lon, origin_lat : float
///     Origin coordinates in degrees
/// destination_lon, destination_lat : float
///     Destination coordinates in degrees
/// units : str, default="nm"
///     "nm", "miles", "kilometers" or "km". Unknown values fall back to kilometers.
///
/// Returns
/// -------
/// str or None
///     GeoJSON LineString Feature with ``units`` and ``length`` properties,
///     or None if no route connects the points
#[pyfunction]
#[gen_stub_pyfunction]
#[pyo3(signature = (network, origin_lon, origin_lat, destination_lon, destination_lat, units = "nm"))]
pub fn calculate_route(
    py: Python<'_>,
    network: &PySeaNetwork,
    origin_lon: f64,
    origin_lat: f64,
    destination_lon: f64,
    destination_lat: f64,
    units: &str,
) -> PyResult<Option<String>> {
    let units = Units::parse(units);
    let origin = Coord {
        x: origin_lon,
        y: origin_lat,
    };
    let destination = Coord {
        x: destination_lon,
        y: destination_lat,
    };

    let route = py
        .detach(|| network.router.calculate_route(origin, destination, units))
        .map_err(to_py_err)?;

    optional_route_to_geojson(route.as_ref())
}

#[pyfunction]
#[gen_stub_pyfunction]
#[pyo3(signature = (network, origin, destinations, units = "nm"))]
pub fn calculate_routes_one_to_many(
    py: Python<'_>,
    network: &PySeaNetwork,
    origin: (f64, f64),
    destinations: Vec<(f64, f64)>,
    units: &str,
) -> PyResult<Vec<Option<String>>> {
    let units = Units::parse(units);
    let origin = Coord::from(origin);
    let destinations: Vec<Coord<f64>> = destinations.into_iter().map(Coord::from).collect();

    let routes = py
        .detach(|| {
            network
                .router
                .calculate_routes_one_to_many(origin, &destinations, units)
        })
        .map_err(to_py_err)?;

    routes
        .iter()
        .map(|route| optional_route_to_geojson(route.as_ref()))
        .collect()
}

/// Snap a point onto the nearest sea network vertex
///
/// Returns
/// -------
/// tuple[float, float]
///     (lon, lat) of the vertex, or the input point if nothing is within the
///     network's snap threshold
#[pyfunction]
#[gen_stub_pyfunction]
pub fn snap_to_network(network: &PySeaNetwork, lon: f64, lat: f64) -> PyResult<(f64, f64)> {
    let snapped = network
        .router
        .snap(Coord { x: lon, y: lat })
        .map_err(to_py_err)?;
    Ok((snapped.x, snapped.y))
}
