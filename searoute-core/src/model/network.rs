//! Weighted undirected graph built from network polylines

use geo::{Coord, LineString};
use hashbrown::HashMap;
use itertools::Itertools;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use super::components::{SeaEdge, SeaVertex, VertexKey};
use crate::geo_math::great_circle_distance_km;

pub type SeaGraph = UnGraph<SeaVertex, SeaEdge>;

/// Routing graph of the sea network.
///
/// Vertices are deduplicated by [`VertexKey`], so polylines sharing an
/// endpoint are connected. Every segment becomes one undirected edge, which
/// makes adjacency symmetric. Parallel edges are kept as-is.
#[derive(Debug, Clone, Default)]
pub struct NetworkGraph {
    pub(crate) graph: SeaGraph,
    key_to_node: HashMap<VertexKey, NodeIndex>,
}

impl NetworkGraph {
    /// Builds the graph from polylines.
    ///
    /// Polylines with fewer than two points are skipped.
    pub fn build<'a, I>(polylines: I) -> Self
    where
        I: IntoIterator<Item = &'a LineString<f64>>,
    {
        let mut network = Self::default();
        let mut skipped = 0usize;

        for line in polylines {
            if line.0.len() < 2 {
                skipped += 1;
                continue;
            }

            for (&from, &to) in line.0.iter().tuple_windows() {
                network.add_segment(from, to);
            }
        }

        if skipped > 0 {
            log::debug!("Skipped {skipped} degenerate polylines while building the sea graph");
        }
        log::debug!(
            "Sea graph built with {} vertices and {} edges",
            network.vertex_count(),
            network.edge_count()
        );

        network
    }

    fn add_segment(&mut self, from: Coord<f64>, to: Coord<f64>) {
        let (Some(from_key), Some(to_key)) = (VertexKey::from_coord(from), VertexKey::from_coord(to))
        else {
            log::debug!("Ignoring segment with invalid coordinate: {from:?} -> {to:?}");
            return;
        };
        let source = self.register_vertex(from_key, from);
        let target = self.register_vertex(to_key, to);

        if source == target {
            log::trace!("Ignoring zero-length segment at {from:?}");
            return;
        }

        let weight = great_circle_distance_km(
            self.graph[source].coordinate,
            self.graph[target].coordinate,
        );
        self.graph.add_edge(source, target, SeaEdge { weight });
    }

    /// Returns the node for `key`, creating it on first occurrence
    fn register_vertex(&mut self, key: VertexKey, coord: Coord<f64>) -> NodeIndex {
        let graph = &mut self.graph;
        *self.key_to_node.entry(key).or_insert_with(|| {
            graph.add_node(SeaVertex {
                key,
                coordinate: coord,
            })
        })
    }

    /// Neighbours of `key` with edge weights in kilometers.
    ///
    /// Empty if the vertex is not part of the graph.
    pub fn neighbors(&self, key: VertexKey) -> Vec<(VertexKey, f64)> {
        self.node_index(key)
            .map(|node| {
                self.adjacent(node)
                    .map(|(next, weight)| (self.graph[next].key, weight))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn adjacent(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.graph.edges(node).map(move |edge| {
            let next = if edge.source() == node {
                edge.target()
            } else {
                edge.source()
            };
            (next, edge.weight().weight)
        })
    }

    /// Original coordinate stored for `key`
    pub fn coordinate_of(&self, key: VertexKey) -> Option<Coord<f64>> {
        self.vertex_by_key(key).map(|vertex| vertex.coordinate)
    }

    pub fn contains(&self, key: VertexKey) -> bool {
        self.key_to_node.contains_key(&key)
    }

    pub fn node_index(&self, key: VertexKey) -> Option<NodeIndex> {
        self.key_to_node.get(&key).copied()
    }

    pub fn vertex(&self, node: NodeIndex) -> Option<&SeaVertex> {
        self.graph.node_weight(node)
    }

    pub fn vertex_by_key(&self, key: VertexKey) -> Option<&SeaVertex> {
        self.node_index(key).and_then(|node| self.vertex(node))
    }

    pub fn vertices(&self) -> impl Iterator<Item = &SeaVertex> {
        self.graph.node_weights()
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}
