//! Data model for sea routing
//!
//! Contains the routing graph and the network polylines it was built from.

pub mod components;
pub mod network;
pub mod sea_network;

pub use components::{SeaEdge, SeaVertex, VertexKey};
pub use network::{NetworkGraph, SeaGraph};
pub use sea_network::{SeaNetwork, SeaNetworkMeta};
