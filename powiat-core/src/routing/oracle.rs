#[cfg(test)]
#[path = "../../tests/unit/routing/oracle_test.rs"]
mod oracle_test;

use super::ShortestPathTree;
use crate::models::{Coordinate, NodeId, RoadGraph};
use colony::prelude::{Float, TransitionCost};
use std::sync::OnceLock;

/// Maps graph nodes to dense indices `0..n` following graph encounter order.
#[derive(Clone, Debug)]
pub struct NodeIndex {
    nodes: Vec<NodeId>,
    dense: Vec<Option<usize>>,
}

impl NodeIndex {
    /// Creates an index of all existing graph nodes.
    pub fn new(graph: &RoadGraph) -> Self {
        let nodes = graph.node_ids().collect::<Vec<_>>();
        let capacity = nodes.last().map_or(0, |&last| last + 1);

        let dense = nodes.iter().enumerate().fold(vec![None; capacity], |mut dense, (idx, &node)| {
            dense[node] = Some(idx);
            dense
        });

        Self { nodes, dense }
    }

    /// Returns amount of indexed nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns graph node handle for dense index.
    pub fn node_id(&self, index: usize) -> Option<NodeId> {
        self.nodes.get(index).copied()
    }

    /// Returns dense index for graph node handle.
    pub fn dense(&self, node: NodeId) -> Option<usize> {
        self.dense.get(node).copied().flatten()
    }
}

/// Answers shortest path distance queries between dense node indices.
///
/// Shortest path trees are computed lazily, one per source, and cached for the oracle lifetime.
/// A pair is always answered from the tree of its smaller index, so results are symmetric.
/// The cache can be shared between threads.
pub struct DistanceOracle<'a> {
    graph: &'a RoadGraph,
    index: NodeIndex,
    rows: Vec<OnceLock<ShortestPathTree>>,
}

impl<'a> DistanceOracle<'a> {
    /// Creates a new instance of `DistanceOracle`.
    pub fn new(graph: &'a RoadGraph) -> Self {
        let index = NodeIndex::new(graph);
        let rows = (0..index.size()).map(|_| OnceLock::new()).collect();

        Self { graph, index, rows }
    }

    /// Returns amount of nodes.
    pub fn size(&self) -> usize {
        self.index.size()
    }

    /// Returns node index used by the oracle.
    pub fn index(&self) -> &NodeIndex {
        &self.index
    }

    /// Returns coordinate of the node with given dense index.
    pub fn coordinate(&self, index: usize) -> Option<Coordinate> {
        self.index.node_id(index).and_then(|node| self.graph.coordinate(node))
    }

    /// Returns shortest path distance in meters. Unreachable or unknown nodes are at infinite
    /// distance.
    pub fn distance(&self, from: usize, to: usize) -> Float {
        if from == to {
            return if from < self.size() { 0. } else { Float::INFINITY };
        }

        let (source, target) = if from < to { (from, to) } else { (to, from) };

        self.row(source).map_or(Float::INFINITY, |row| row.distance(target))
    }

    /// Returns dense indices of one shortest path between two nodes, both included.
    pub fn path(&self, from: usize, to: usize) -> Option<Vec<usize>> {
        if from == to {
            return (from < self.size()).then(|| vec![from]);
        }

        let (source, target) = if from < to { (from, to) } else { (to, from) };
        let mut path = self.row(source)?.path(target)?;

        if from > to {
            path.reverse();
        }

        Some(path)
    }

    /// Returns amount of computed shortest path trees.
    pub fn cached_rows(&self) -> usize {
        self.rows.iter().filter(|row| row.get().is_some()).count()
    }

    fn row(&self, source: usize) -> Option<&ShortestPathTree> {
        self.rows.get(source).map(|row| row.get_or_init(|| ShortestPathTree::new(self.graph, &self.index, source)))
    }
}

impl TransitionCost for DistanceOracle<'_> {
    fn size(&self) -> usize {
        self.index.size()
    }

    fn cost(&self, from: usize, to: usize) -> Float {
        self.distance(from, to)
    }
}
