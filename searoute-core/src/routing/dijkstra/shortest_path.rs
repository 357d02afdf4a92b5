use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use geo::{Coord, LineString};
use hashbrown::HashMap;
use petgraph::graph::NodeIndex;

use super::state::State;
use crate::model::{NetworkGraph, VertexKey};

/// Shortest path between two graph vertices
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Original vertex coordinates from start to end, both inclusive
    pub path: Vec<Coord<f64>>,
    /// Total edge weight along `path` in kilometers
    pub distance_km: f64,
}

impl PathResult {
    pub fn into_line_string(self) -> LineString<f64> {
        LineString::new(self.path)
    }
}

/// Dijkstra's algorithm between the vertices at `start` and `end`.
///
/// Both coordinates must already be graph vertices (after rounding); no
/// snapping happens here. Returns `None` when either coordinate is not
/// finite, either vertex is missing or the two lie in disconnected components.
pub fn find_path(graph: &NetworkGraph, start: Coord<f64>, end: Coord<f64>) -> Option<PathResult> {
    let (Some(source), Some(target)) = (node_at(graph, start), node_at(graph, end)) else {
        log::trace!("Endpoint not in sea graph: start={start:?}, end={end:?}");
        return None;
    };

    if source == target {
        return Some(PathResult {
            path: vec![graph.vertex(source)?.coordinate],
            distance_km: 0.0,
        });
    }

    let (distances, predecessors) = dijkstra_to_target(graph, source, target);

    let distance_km = *distances.get(&target)?;
    let nodes = reconstruct_nodes(&predecessors, source, target)?;
    let path = nodes
        .into_iter()
        .map(|node| graph.vertex(node).map(|vertex| vertex.coordinate))
        .collect::<Option<Vec<_>>>()?;

    Some(PathResult { path, distance_km })
}

fn node_at(graph: &NetworkGraph, coord: Coord<f64>) -> Option<NodeIndex> {
    VertexKey::from_coord(coord).and_then(|key| graph.node_index(key))
}

/// Runs the search from `source` until `target` is settled or the frontier
/// is exhausted. Stale heap entries are skipped on extraction.
fn dijkstra_to_target(
    graph: &NetworkGraph,
    source: NodeIndex,
    target: NodeIndex,
) -> (HashMap<NodeIndex, f64>, HashMap<NodeIndex, NodeIndex>) {
    let node_count = graph.vertex_count();
    let estimated_nodes = node_count.min(1000);
    let mut distances: HashMap<NodeIndex, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut settled = FixedBitSet::with_capacity(node_count);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);

    heap.push(State {
        cost: 0.0,
        node: source,
    });
    distances.insert(source, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        // A node is final on its first extraction
        if settled.put(node.index()) {
            continue;
        }

        if node == target {
            break;
        }

        for (next, weight) in graph.adjacent(node) {
            if settled.contains(next.index()) {
                continue;
            }
            let next_cost = cost + weight;

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, node);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    (distances, predecessors)
}

/// Follows predecessors back from `target`, returning nodes in start-to-end order
fn reconstruct_nodes(
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    source: NodeIndex,
    target: NodeIndex,
) -> Option<Vec<NodeIndex>> {
    let mut nodes = vec![target];
    let mut current = target;

    while current != source {
        current = *predecessors.get(&current)?;
        nodes.push(current);
    }

    nodes.reverse();
    Some(nodes)
}
