use std::path::PathBuf;

use crate::routing::SNAP_THRESHOLD_KM;

/// Configuration for loading a sea network
#[derive(Debug, Clone)]
pub struct SeaNetworkConfig {
    /// Path to a `GeoJSON` `FeatureCollection` of `LineString` features
    pub network_path: PathBuf,
    /// Maximum distance for snapping query points onto a network polyline
    pub snap_threshold_km: f64,
}

impl SeaNetworkConfig {
    pub fn new(network_path: impl Into<PathBuf>) -> Self {
        Self {
            network_path: network_path.into(),
            snap_threshold_km: SNAP_THRESHOLD_KM,
        }
    }
}
