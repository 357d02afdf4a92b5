use pyo3::prelude::*;
use pyo3_stub_gen::define_stub_info_gatherer;

use matrix::route_length_matrix;
use model::{PySeaNetwork, py_load_sea_network, py_sea_network_from_geojson};
use routing::{calculate_route, calculate_routes_one_to_many, snap_to_network};

pub mod matrix;
pub mod model;
pub mod routing;

/// A Python module implemented in Rust.
#[pymodule]
fn searoute(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_class::<PySeaNetwork>()?;
    m.add_function(wrap_pyfunction!(py_load_sea_network, m)?)?;
    m.add_function(wrap_pyfunction!(py_sea_network_from_geojson, m)?)?;

    m.add_function(wrap_pyfunction!(calculate_route, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_routes_one_to_many, m)?)?;
    m.add_function(wrap_pyfunction!(snap_to_network, m)?)?;

    m.add_function(wrap_pyfunction!(route_length_matrix, m)?)?;
    Ok(())
}

define_stub_info_gatherer!(stub_info);
