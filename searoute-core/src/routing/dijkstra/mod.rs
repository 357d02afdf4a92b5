mod shortest_path;
mod state;

pub use shortest_path::{PathResult, find_path};
