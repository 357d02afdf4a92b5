use geo::{Geometry, LineString};

use super::network::NetworkGraph;
use crate::routing::snapping::SNAP_THRESHOLD_KM;

/// Settings that travel with a loaded network
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeaNetworkMeta {
    /// Polylines farther than this from a query point are never snapped to
    pub snap_threshold_km: f64,
}

impl Default for SeaNetworkMeta {
    fn default() -> Self {
        Self {
            snap_threshold_km: SNAP_THRESHOLD_KM,
        }
    }
}

/// The maritime network: source polylines in dataset order plus the routing
/// graph built from them. Immutable once constructed.
#[derive(Debug, Clone, Default)]
pub struct SeaNetwork {
    graph: NetworkGraph,
    polylines: Vec<LineString<f64>>,
    pub meta: SeaNetworkMeta,
}

impl SeaNetwork {
    pub fn new(polylines: Vec<LineString<f64>>) -> Self {
        Self::with_meta(polylines, SeaNetworkMeta::default())
    }

    pub fn with_meta(polylines: Vec<LineString<f64>>, meta: SeaNetworkMeta) -> Self {
        let graph = NetworkGraph::build(&polylines);
        Self {
            graph,
            polylines,
            meta,
        }
    }

    /// Keeps only `LineString` geometries; everything else is ignored.
    pub fn from_geometries<I>(geometries: I, meta: SeaNetworkMeta) -> Self
    where
        I: IntoIterator<Item = Geometry<f64>>,
    {
        let mut ignored = 0usize;
        let polylines = geometries
            .into_iter()
            .filter_map(|geometry| match geometry {
                Geometry::LineString(line) => Some(line),
                _ => {
                    ignored += 1;
                    None
                }
            })
            .collect();

        if ignored > 0 {
            log::debug!("Ignored {ignored} non-linestring geometries in sea network");
        }

        Self::with_meta(polylines, meta)
    }

    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }

    /// Network polylines in their original order
    pub fn polylines(&self) -> &[LineString<f64>] {
        &self.polylines
    }

    pub fn polyline_count(&self) -> usize {
        self.polylines.len()
    }

    pub fn network_info(&self) -> String {
        format!(
            "SeaNetwork with {} polylines, {} vertices and {} edges",
            self.polylines.len(),
            self.graph.vertex_count(),
            self.graph.edge_count()
        )
    }
}
