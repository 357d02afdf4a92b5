//! This module is responsible for loading the maritime network from `GeoJSON`
//! data and building a routable sea network.

mod builder;
mod config;
mod parser;

pub use builder::{create_sea_network, sea_network_from_geojson_str};
pub use config::SeaNetworkConfig;
pub use parser::parse_network_geometries;
