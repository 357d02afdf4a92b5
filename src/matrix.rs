use geo::Coord;
use pyo3::prelude::*;
use pyo3_stub_gen::derive::gen_stub_pyfunction;
use rayon::prelude::*;
use searoute_core::prelude::*;

use crate::model::PySeaNetwork;

/// Route lengths between every pair of points, in the requested units.
///
/// Entry ``[i][j]`` is None when no route connects point i to point j.
#[gen_stub_pyfunction]
#[pyfunction]
#[pyo3(signature = (network, points, units = "nm"))]
pub fn route_length_matrix(
    py: Python<'_>,
    network: &PySeaNetwork,
    points: Vec<(f64, f64)>,
    units: &str,
) -> PyResult<Vec<Vec<Option<f64>>>> {
    let units = Units::parse(units);
    let points: Vec<Coord<f64>> = points.into_iter().map(Coord::from).collect();

    let full_vec = py.detach(|| {
        points
            .par_iter()
            .map(|&start_point| {
                match network
                    .router
                    .calculate_routes_one_to_many(start_point, &points, units)
                {
                    Ok(result) => result,
                    Err(e) => {
                        log::warn!("Routing failed for point {start_point:?}, error: {e}");
                        vec![None; points.len()]
                    }
                }
            })
            .map(|vector| {
                vector
                    .into_iter()
                    .map(|route| route.map(|route| route.length))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>()
    });

    Ok(full_vec)
}
