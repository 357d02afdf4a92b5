use searoute_core::prelude::*;

use pyo3::prelude::*;
use pyo3_stub_gen::derive::{gen_stub_pyclass, gen_stub_pyfunction, gen_stub_pymethods};

/// SeaNetwork
///
/// The maritime traffic network used for sea routing: network polylines in
/// dataset order plus the weighted graph built from them.
///
/// The network is immutable once loaded and can be shared between threads.
///
/// Example:
///
/// .. code-block:: python
///
///     network = load_sea_network("path/to/marnet.geojson")
///     route = calculate_route(network, -74.0, 40.7, -9.1, 38.7, "nm")
#[gen_stub_pyclass]
#[pyclass(name = "SeaNetwork", frozen)]
pub struct PySeaNetwork {
    pub(crate) router: SeaRouter,
}

#[gen_stub_pymethods]
#[pymethods]
impl PySeaNetwork {
    pub fn polyline_count(&self) -> usize {
        self.router.network().polyline_count()
    }

    pub fn vertex_count(&self) -> usize {
        self.router.network().graph().vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.router.network().graph().edge_count()
    }

    fn __repr__(&self) -> String {
        self.router.network().network_info()
    }

    fn __str__(&self) -> String {
        self.__repr__()
    }
}

/// Load a sea network from a GeoJSON file
///
/// Parameters
/// ----------
/// path : str
///     Path to a GeoJSON FeatureCollection of LineString features
/// snap_threshold_km : float, default=30000.0
///     Query points farther than this from every network line are not snapped
///
/// Returns
/// -------
/// SeaNetwork
///
/// Raises
/// ------
/// RuntimeError
///     If the file is missing or is not a valid FeatureCollection
#[gen_stub_pyfunction]
#[pyfunction(name = "load_sea_network")]
#[pyo3(signature = (path, snap_threshold_km = SNAP_THRESHOLD_KM))]
pub fn py_load_sea_network(
    py: Python<'_>,
    path: &str,
    snap_threshold_km: f64,
) -> PyResult<PySeaNetwork> {
    py.detach(|| {
        let config = SeaNetworkConfig {
            network_path: std::path::PathBuf::from(path),
            snap_threshold_km,
        };

        let network = create_sea_network(&config).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Failed to load sea network: {e}"
            ))
        })?;

        Ok(PySeaNetwork {
            router: SeaRouter::new(network),
        })
    })
}

/// Build a sea network from a GeoJSON FeatureCollection string
#[gen_stub_pyfunction]
#[pyfunction(name = "sea_network_from_geojson")]
#[pyo3(signature = (geojson, snap_threshold_km = SNAP_THRESHOLD_KM))]
pub fn py_sea_network_from_geojson(
    py: Python<'_>,
    geojson: &str,
    snap_threshold_km: f64,
) -> PyResult<PySeaNetwork> {
    py.detach(|| {
        let network = sea_network_from_geojson_str(geojson, SeaNetworkMeta { snap_threshold_km })
            .map_err(|e| {
                PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                    "Invalid sea network: {e}"
                ))
            })?;

        Ok(PySeaNetwork {
            router: SeaRouter::new(network),
        })
    })
}
