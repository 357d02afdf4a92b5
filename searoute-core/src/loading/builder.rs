use log::{info, warn};

use super::config::SeaNetworkConfig;
use super::parser::parse_network_geometries;
use crate::{Error, SeaNetwork, SeaNetworkMeta};

/// Creates a sea network based on the provided configuration
///
/// # Errors
///
/// Returns an error if the network file is missing or is not a valid
/// `GeoJSON` `FeatureCollection`
pub fn create_sea_network(config: &SeaNetworkConfig) -> Result<SeaNetwork, Error> {
    validate_config(config)?;

    info!("Loading sea network: {}", config.network_path.display());

    let json = std::fs::read_to_string(&config.network_path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!(
                "Failed to read network file '{}': {e}",
                config.network_path.display()
            ),
        )
    })?;

    let network = sea_network_from_geojson_str(
        &json,
        SeaNetworkMeta {
            snap_threshold_km: config.snap_threshold_km,
        },
    )?;

    info!("{}", network.network_info());
    Ok(network)
}

/// Builds a sea network from an in-memory `GeoJSON` `FeatureCollection`
///
/// # Errors
///
/// Returns an error if `json` is not a valid `GeoJSON` `FeatureCollection`
pub fn sea_network_from_geojson_str(json: &str, meta: SeaNetworkMeta) -> Result<SeaNetwork, Error> {
    let geometries = parse_network_geometries(json)?;
    let network = SeaNetwork::from_geometries(geometries, meta);

    if network.graph().is_empty() {
        warn!("Sea network contains no routable segments");
    }

    Ok(network)
}

fn validate_config(config: &SeaNetworkConfig) -> Result<(), Error> {
    if !config.network_path.exists() {
        return Err(Error::InvalidData(format!(
            "Sea network file not found: {}",
            config.network_path.display()
        )));
    }

    if config.snap_threshold_km.is_nan() || config.snap_threshold_km <= 0.0 {
        return Err(Error::InvalidData(format!(
            "Snap threshold must be positive, got {}",
            config.snap_threshold_km
        )));
    }

    Ok(())
}
