//! Shortest sea route calculation over a maritime traffic network.
//!
//! The network is a set of polylines turned into a weighted undirected graph.
//! Query points are snapped onto the network, connected with Dijkstra's
//! algorithm and measured on a spherical earth.

pub mod error;
pub mod geo_math;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use geo_math::Units;
pub use loading::{SeaNetworkConfig, create_sea_network, sea_network_from_geojson_str};
pub use model::{NetworkGraph, SeaNetwork, SeaNetworkMeta, VertexKey};
pub use routing::{PathResult, Route, SeaRouter, find_path, snap_to_network};
