use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::Parser;
use searoute_core::Units;
use searoute_core::routing::SNAP_THRESHOLD_KM;
use serde::Deserialize;

#[derive(Debug, Parser)]
#[command(name = "searoute-server", version, about = "HTTP service for shortest sea route queries")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the sea network GeoJSON, overrides the configuration file
    #[arg(short, long)]
    pub network: Option<PathBuf>,

    /// Address to listen on, overrides the configuration file
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("no sea network configured, pass --network or set network_path")]
    MissingNetwork,
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub network_path: Option<PathBuf>,
    pub default_units: Units,
    pub snap_threshold_km: f64,
    pub request_timeout_secs: u64,
    pub max_concurrent_requests: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            network_path: None,
            default_units: Units::NauticalMiles,
            snap_threshold_km: SNAP_THRESHOLD_KM,
            request_timeout_secs: 30,
            max_concurrent_requests: 64,
        }
    }
}

impl ServerConfig {
    /// Reads the optional config file and applies command line overrides
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(network) = &cli.network {
            config.network_path = Some(network.clone());
        }
        if let Some(bind) = cli.bind {
            config.bind = bind;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.network_path.is_none() {
            return Err(ConfigError::MissingNetwork);
        }
        if self.max_concurrent_requests == 0 {
            return Err(ConfigError::Invalid(
                "max_concurrent_requests must be at least 1".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
