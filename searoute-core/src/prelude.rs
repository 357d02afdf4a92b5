pub use crate::Error;

// Loading
pub use crate::loading::{SeaNetworkConfig, create_sea_network, sea_network_from_geojson_str};

// Network model
pub use crate::model::{NetworkGraph, SeaNetwork, SeaNetworkMeta, VertexKey};

// Routing
pub use crate::routing::{
    PathResult, Route, SNAP_THRESHOLD_KM, SeaRouter, find_path, snap_to_network,
    snap_with_threshold,
};

// Distances
pub use crate::geo_math::{
    Units, convert_distance, great_circle_distance_km, point_to_polyline_distance,
    point_to_segment_distance_km, polyline_length, rhumb_distance,
};
