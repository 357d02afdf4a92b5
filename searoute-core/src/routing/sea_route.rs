//! Route calculation between arbitrary points: snap, search, measure

use std::sync::Arc;

use geo::Coord;
use geojson::Feature;
use log::info;
use rayon::prelude::*;

use super::dijkstra::find_path;
use super::route::Route;
use super::snapping::snap_to_network;
use crate::Error;
use crate::geo_math::Units;
use crate::model::SeaNetwork;

/// Shortest sea route calculator over a shared, immutable network
#[derive(Debug, Clone)]
pub struct SeaRouter {
    network: Arc<SeaNetwork>,
}

impl SeaRouter {
    pub fn new(network: SeaNetwork) -> Self {
        Self::from_shared(Arc::new(network))
    }

    pub fn from_shared(network: Arc<SeaNetwork>) -> Self {
        Self { network }
    }

    pub fn network(&self) -> &SeaNetwork {
        &self.network
    }

    /// Snaps a query point onto the nearest network vertex
    pub fn snap(&self, point: Coord<f64>) -> Result<Coord<f64>, Error> {
        validate_coord(point)?;
        Ok(snap_to_network(&self.network, point))
    }

    /// Calculates the shortest sea route between two points.
    ///
    /// Both points are snapped onto the network first. `Ok(None)` means no
    /// route connects them.
    ///
    /// # Errors
    ///
    /// Returns an error if either coordinate is not finite
    pub fn calculate_route(
        &self,
        origin: Coord<f64>,
        destination: Coord<f64>,
        units: Units,
    ) -> Result<Option<Route>, Error> {
        let snapped_origin = self.snap(origin)?;
        let snapped_destination = self.snap(destination)?;

        let route = find_path(self.network.graph(), snapped_origin, snapped_destination)
            .map(|path| Route::from_path(path, units));

        if route.is_none() {
            info!("No route found between {origin:?} and {destination:?}");
        }

        Ok(route)
    }

    /// Same as [`SeaRouter::calculate_route`] with `GeoJSON` Point features as endpoints
    ///
    /// # Errors
    ///
    /// Returns an error if either feature is not a valid Point
    pub fn calculate_route_from_features(
        &self,
        origin: &Feature,
        destination: &Feature,
        units: Units,
    ) -> Result<Option<Route>, Error> {
        self.calculate_route(point_from_feature(origin)?, point_from_feature(destination)?, units)
    }

    /// Routes from one origin to many destinations in parallel. The result
    /// has one entry per destination, in input order.
    ///
    /// # Errors
    ///
    /// Returns an error if any coordinate is not finite
    pub fn calculate_routes_one_to_many(
        &self,
        origin: Coord<f64>,
        destinations: &[Coord<f64>],
        units: Units,
    ) -> Result<Vec<Option<Route>>, Error> {
        let snapped_origin = self.snap(origin)?;
        for &destination in destinations {
            validate_coord(destination)?;
        }

        let routes: Vec<Option<Route>> = destinations
            .par_iter()
            .map(|&destination| {
                let snapped_destination = snap_to_network(&self.network, destination);
                find_path(self.network.graph(), snapped_origin, snapped_destination)
                    .map(|path| Route::from_path(path, units))
            })
            .collect();

        let found = routes.iter().filter(|route| route.is_some()).count();
        info!(
            "Found {found} of {} routes from {origin:?}",
            destinations.len()
        );

        Ok(routes)
    }
}

fn validate_coord(coord: Coord<f64>) -> Result<(), Error> {
    if coord.x.is_finite() && coord.y.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidCoordinate {
            lon: coord.x,
            lat: coord.y,
        })
    }
}

fn point_from_feature(feature: &Feature) -> Result<Coord<f64>, Error> {
    let geometry = feature
        .geometry
        .clone()
        .ok_or_else(|| Error::InvalidData("Feature has no geometry".to_string()))?;

    match geo::Geometry::<f64>::try_from(geometry) {
        Ok(geo::Geometry::Point(point)) => Ok(point.0),
        Ok(_) => Err(Error::InvalidData(
            "Expected a Point geometry".to_string(),
        )),
        Err(e) => Err(Error::GeoJsonError(e.to_string())),
    }
}
