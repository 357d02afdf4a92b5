//! Shortest-path search, snapping and route assembly

pub mod dijkstra;
pub mod route;
pub mod sea_route;
pub mod snapping;

pub use dijkstra::{PathResult, find_path};
pub use route::Route;
pub use sea_route::SeaRouter;
pub use snapping::{SNAP_THRESHOLD_KM, snap_to_network, snap_with_threshold};
