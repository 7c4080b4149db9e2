#[cfg(test)]
#[path = "../../tests/unit/models/graph_test.rs"]
mod graph_test;

use crate::models::{Coordinate, DistanceMetric};
use colony::prelude::{Float, compare_floats};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// A stable handle of a node within one graph value.
pub type NodeId = usize;

/// A stable handle of an edge within one graph value.
pub type EdgeId = usize;

/// An undirected weighted edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    /// A node where the edge was added from.
    pub source: NodeId,
    /// A node where the edge was added to.
    pub target: NodeId,
    /// Edge length in meters.
    pub weight: Float,
}

impl Edge {
    /// Returns the other endpoint of the edge.
    pub fn opposite(&self, node: NodeId) -> NodeId {
        if self.source == node { self.target } else { self.source }
    }
}

#[derive(Clone, Debug)]
struct NodeEntry {
    coordinate: Coordinate,
    incident: Vec<EdgeId>,
}

/// An undirected road network multigraph keyed by coordinates.
///
/// Nodes keep their insertion order which is the canonical iteration order. Removal leaves a
/// vacant slot, so handles of remaining nodes and edges stay valid. Use [`RoadGraph::compact`]
/// to get a copy without vacant slots.
#[derive(Clone, Debug, Default)]
pub struct RoadGraph {
    nodes: Vec<Option<NodeEntry>>,
    edges: Vec<Option<Edge>>,
    index: FxHashMap<Coordinate, NodeId>,
    node_count: usize,
    edge_count: usize,
}

impl RoadGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node if it is not present yet and returns its handle.
    pub fn add_node(&mut self, coordinate: Coordinate) -> NodeId {
        if let Some(&node) = self.index.get(&coordinate) {
            return node;
        }

        let node = self.nodes.len();
        self.nodes.push(Some(NodeEntry { coordinate, incident: Vec::default() }));
        self.index.insert(coordinate, node);
        self.node_count += 1;

        node
    }

    /// Adds an edge between two coordinates, inserting missing nodes.
    ///
    /// Self-loops and weights which are negative or not finite are rejected.
    pub fn add_edge(&mut self, from: Coordinate, to: Coordinate, weight: Float) -> Option<EdgeId> {
        if from == to || !is_valid_weight(weight) {
            return None;
        }

        let source = self.add_node(from);
        let target = self.add_node(to);

        self.add_edge_between(source, target, weight)
    }

    /// Adds an edge between two existing nodes.
    pub fn add_edge_between(&mut self, source: NodeId, target: NodeId, weight: Float) -> Option<EdgeId> {
        if source == target || !is_valid_weight(weight) || !self.contains_node(source) || !self.contains_node(target) {
            return None;
        }

        let edge = self.edges.len();
        self.edges.push(Some(Edge { source, target, weight }));
        self.edge_count += 1;

        [source, target].into_iter().for_each(|node| {
            if let Some(entry) = self.nodes[node].as_mut() {
                entry.incident.push(edge);
            }
        });

        Some(edge)
    }

    /// Removes the node together with all its incident edges. Returns its coordinate.
    pub fn remove_node(&mut self, node: NodeId) -> Option<Coordinate> {
        let entry = self.nodes.get_mut(node)?.take()?;

        entry.incident.iter().for_each(|&edge| {
            let Some(removed) = self.edges.get_mut(edge).and_then(|slot| slot.take()) else { return };
            self.edge_count -= 1;

            let other = removed.opposite(node);
            if let Some(other) = self.nodes.get_mut(other).and_then(|slot| slot.as_mut()) {
                other.incident.retain(|&incident| incident != edge);
            }
        });

        self.index.remove(&entry.coordinate);
        self.node_count -= 1;

        Some(entry.coordinate)
    }

    /// Returns amount of nodes.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns amount of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Checks whether the node handle refers to an existing node.
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.get(node).is_some_and(|slot| slot.is_some())
    }

    /// Returns node handle for given coordinate.
    pub fn node_id(&self, coordinate: &Coordinate) -> Option<NodeId> {
        self.index.get(coordinate).copied()
    }

    /// Returns coordinate of the node.
    pub fn coordinate(&self, node: NodeId) -> Option<Coordinate> {
        self.entry(node).map(|entry| entry.coordinate)
    }

    /// Returns existing node handles in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().enumerate().filter_map(|(node, slot)| slot.as_ref().map(|_| node))
    }

    /// Returns coordinates of existing nodes in insertion order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.nodes.iter().filter_map(|slot| slot.as_ref().map(|entry| entry.coordinate))
    }

    /// Returns existing edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().flatten()
    }

    /// Returns edges incident to the node.
    pub fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.entry(node)
            .into_iter()
            .flat_map(|entry| entry.incident.iter())
            .filter_map(|&edge| self.edges.get(edge).and_then(|slot| slot.as_ref()))
    }

    /// Returns amount of incident edge endpoints. Parallel edges are counted separately.
    pub fn degree(&self, node: NodeId) -> usize {
        self.entry(node).map_or(0, |entry| entry.incident.len())
    }

    /// Returns distinct neighbours of the node in order of their first incident edge.
    pub fn neighbours(&self, node: NodeId) -> Vec<NodeId> {
        self.incident_edges(node).map(|edge| edge.opposite(node)).fold(Vec::default(), |mut acc, neighbour| {
            if !acc.contains(&neighbour) {
                acc.push(neighbour);
            }
            acc
        })
    }

    /// Returns the smallest weight among parallel edges between two nodes.
    pub fn min_weight(&self, from: NodeId, to: NodeId) -> Option<Float> {
        self.incident_edges(from)
            .filter(|edge| edge.opposite(from) == to)
            .map(|edge| edge.weight)
            .min_by(|a, b| compare_floats(*a, *b))
    }

    /// Returns sum of all edge weights.
    pub fn total_weight(&self) -> Float {
        self.edges().map(|edge| edge.weight).sum()
    }

    /// Finds the node closest to given coordinate. Ties are resolved by insertion order.
    pub fn find_nearest(&self, coordinate: &Coordinate, metric: &dyn DistanceMetric) -> Option<NodeId> {
        if let Some(node) = self.node_id(coordinate) {
            return Some(node);
        }

        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(node, slot)| slot.as_ref().map(|entry| (node, metric.distance(coordinate, &entry.coordinate))))
            .fold(None, |best: Option<(NodeId, Float)>, (node, distance)| match best {
                Some((_, best_distance)) if compare_floats(distance, best_distance) != Ordering::Less => best,
                _ => Some((node, distance)),
            })
            .map(|(node, _)| node)
    }

    /// Returns a copy of the graph without vacant slots, preserving node and edge order.
    pub fn compact(&self) -> RoadGraph {
        let mut graph = RoadGraph::new();

        self.coordinates().for_each(|coordinate| {
            graph.add_node(coordinate);
        });

        self.edges().for_each(|edge| {
            let (Some(from), Some(to)) = (self.coordinate(edge.source), self.coordinate(edge.target)) else { return };
            graph.add_edge(from, to, edge.weight);
        });

        graph
    }

    fn entry(&self, node: NodeId) -> Option<&NodeEntry> {
        self.nodes.get(node).and_then(|slot| slot.as_ref())
    }
}

fn is_valid_weight(weight: Float) -> bool {
    weight.is_finite() && weight >= 0.
}
